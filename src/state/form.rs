use crate::engine::calculations::net_weight;
use crate::models::{ContainerEdit, Substance};

/// Parse a weight as typed by the user. Unparsable text becomes NaN.
pub fn parse_weight(text: &str) -> f64 {
    text.trim().parse().unwrap_or(f64::NAN)
}

/// Input state for a single container.
///
/// Edits return the `ContainerEdit` to report to the ledger owner, if any.
#[derive(Debug, Clone)]
pub struct ContainerForm {
    pub id: String,

    /// Selected ingredient. Starts as Coco.
    pub substance: Substance,

    /// Empty container weight in grams. NaN after unparsable input.
    pub container_weight: f64,

    /// Container plus contents in grams. NaN after unparsable input.
    pub gross_weight: f64,

    /// Last valid net weight.
    pub value: f64,

    /// Collapsed display once the container holds a reported weight.
    pub minimised: bool,

    /// Whether a positive weight has been reported for this form.
    reported: bool,
}

impl ContainerForm {
    pub fn new(id: impl Into<String>, container_weight: f64) -> Self {
        Self {
            id: id.into(),
            substance: Substance::Coco,
            container_weight,
            gross_weight: 0.0,
            value: 0.0,
            minimised: false,
            reported: false,
        }
    }

    pub fn set_container_weight(&mut self, text: &str) -> Option<ContainerEdit> {
        self.container_weight = parse_weight(text);
        self.recalculate()
    }

    pub fn set_gross_weight(&mut self, text: &str) -> Option<ContainerEdit> {
        self.gross_weight = parse_weight(text);
        self.recalculate()
    }

    /// Change the ingredient. Reports only when the weight is already positive.
    ///
    /// `Unset` clears the selection, so the weight drops out of the totals.
    pub fn set_substance(&mut self, substance: Substance) -> Option<ContainerEdit> {
        if substance == self.substance {
            return None;
        }

        tracing::debug!(
            id = %self.id,
            from = %self.substance,
            to = %substance,
            "substance changed"
        );
        self.substance = substance;

        if self.value > 0.0 {
            Some(self.edit())
        } else {
            None
        }
    }

    /// Bring the form in line with an edit applied to the ledger directly.
    ///
    /// The gross weight is rebuilt from the container weight so later weight
    /// edits start from the edited net weight.
    pub fn sync(&mut self, edit: &ContainerEdit) {
        self.substance = edit.substance;

        if edit.net.is_finite() {
            let net = edit.net.max(0.0);
            if !self.container_weight.is_finite() {
                self.container_weight = 0.0;
            }
            self.gross_weight = self.container_weight + net;
            self.value = net;
            self.minimised = net > 0.0;
            self.reported = net > 0.0;
        }
    }

    /// Recompute the net weight when both inputs are numbers.
    ///
    /// A positive weight is reported and minimises the form. Dropping back to
    /// zero after a report is reported too, so the ledger never keeps a stale
    /// weight.
    fn recalculate(&mut self) -> Option<ContainerEdit> {
        let value = net_weight(self.gross_weight, self.container_weight)?;
        self.value = value;

        if value > 0.0 {
            self.minimised = true;
            self.reported = true;
            Some(self.edit())
        } else {
            self.minimised = false;
            if std::mem::take(&mut self.reported) {
                Some(self.edit())
            } else {
                None
            }
        }
    }

    fn edit(&self) -> ContainerEdit {
        ContainerEdit::new(self.id.clone(), self.substance, self.value)
    }
}
