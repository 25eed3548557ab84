use crate::engine::{self, Direction, MixReport};
use crate::error::{CalcError, Result};
use crate::models::{AggregateTotals, ContainerEdit, ContainerRecord, Substance};
use crate::state::config::CalcConfig;
use crate::state::event::MixEvent;
use crate::state::form::ContainerForm;
use crate::state::ledger::ContainerLedger;

/// Owns the ledger, the ratio and the per-container forms.
///
/// Forms report edits by id; this is the only place the ledger changes.
pub struct MixState {
    ledger: ContainerLedger,

    /// One form per ledger record, same ids, same order.
    forms: Vec<ContainerForm>,

    /// Coco fraction of the target mixture.
    ratio: f64,

    config: CalcConfig,
}

impl MixState {
    pub fn new(config: CalcConfig) -> Self {
        Self {
            ledger: ContainerLedger::new(),
            forms: Vec::new(),
            ratio: config.default_ratio,
            config,
        }
    }

    /// Add an empty container and its form. Returns the new id.
    pub fn add_container(&mut self) -> String {
        let id = self.ledger.add_container();
        self.forms
            .push(ContainerForm::new(id.clone(), self.config.default_container_weight));
        tracing::debug!(%id, "container added");
        id
    }

    /// Make sure a container with this id exists, creating it if needed.
    pub fn ensure_container(&mut self, id: &str) {
        if self.form(id).is_some() {
            return;
        }
        if !self.ledger.contains(id) {
            self.ledger.upsert(ContainerRecord::empty(id));
        }
        self.forms
            .push(ContainerForm::new(id, self.config.default_container_weight));
        tracing::debug!(%id, "container created");
    }

    pub fn edit_substance(&mut self, id: &str, substance: Substance) -> Result<()> {
        let edit = self.form_mut(id)?.set_substance(substance);
        self.report_edit(edit);
        Ok(())
    }

    pub fn edit_container_weight(&mut self, id: &str, text: &str) -> Result<()> {
        let edit = self.form_mut(id)?.set_container_weight(text);
        self.report_edit(edit);
        Ok(())
    }

    pub fn edit_gross_weight(&mut self, id: &str, text: &str) -> Result<()> {
        let edit = self.form_mut(id)?.set_gross_weight(text);
        self.report_edit(edit);
        Ok(())
    }

    /// Upsert a container edit into the ledger.
    ///
    /// The matching form is created or synced so it never overrides the edit.
    pub fn apply_edit(&mut self, edit: ContainerEdit) {
        self.ensure_container(&edit.id);
        if let Some(form) = self.forms.iter_mut().find(|f| f.id == edit.id) {
            form.sync(&edit);
        }
        self.commit(edit);
    }

    /// Remove a container and its form. Unknown ids are ignored.
    pub fn delete_container(&mut self, id: &str) {
        let removed = self.ledger.remove(id);
        self.forms.retain(|f| f.id != id);
        tracing::debug!(%id, removed, "container deleted");
    }

    /// Set the ratio from slider percent. Returns false if the input was ignored.
    pub fn set_ratio_percent(&mut self, percent: f64) -> bool {
        match engine::ratio_from_percent(percent) {
            Some(ratio) => {
                self.ratio = ratio;
                tracing::debug!(ratio, "ratio changed");
                true
            }
            None => {
                tracing::warn!(percent, "ignoring non-numeric ratio");
                false
            }
        }
    }

    pub fn fine_tune(&mut self, direction: Direction) -> f64 {
        self.ratio = engine::fine_tune(self.ratio, direction, self.config.fine_tune_step);
        tracing::debug!(ratio = self.ratio, ?direction, "ratio fine-tuned");
        self.ratio
    }

    /// Fine-tune from a signed payload: `+1` up, `-1` down.
    pub fn fine_tune_sign(&mut self, sign: i32) -> Result<f64> {
        let direction = Direction::from_sign(sign).ok_or_else(|| {
            CalcError::InvalidInput(format!("Fine-tune direction must be +1 or -1, got {}", sign))
        })?;
        Ok(self.fine_tune(direction))
    }

    /// Dispatch a user action.
    pub fn apply(&mut self, event: MixEvent) {
        match event {
            MixEvent::AddContainer => {
                self.add_container();
            }
            MixEvent::Edit(edit) => self.apply_edit(edit),
            MixEvent::Delete { id } => self.delete_container(&id),
            MixEvent::SetRatio { ratio_percent } => {
                self.set_ratio_percent(ratio_percent);
            }
            MixEvent::FineTune { direction } => {
                self.fine_tune(direction);
            }
        }
    }

    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    pub fn config(&self) -> &CalcConfig {
        &self.config
    }

    pub fn ledger(&self) -> &ContainerLedger {
        &self.ledger
    }

    pub fn forms(&self) -> &[ContainerForm] {
        &self.forms
    }

    pub fn form(&self, id: &str) -> Option<&ContainerForm> {
        self.forms.iter().find(|f| f.id == id)
    }

    pub fn totals(&self) -> AggregateTotals {
        self.ledger.totals()
    }

    pub fn report(&self) -> MixReport {
        MixReport::build(self.ledger.records(), self.ratio)
    }

    fn form_mut(&mut self, id: &str) -> Result<&mut ContainerForm> {
        self.forms
            .iter_mut()
            .find(|f| f.id == id)
            .ok_or_else(|| CalcError::ContainerNotFound(id.to_string()))
    }

    fn commit(&mut self, edit: ContainerEdit) {
        self.ledger.upsert(edit.into());

        let totals = self.ledger.totals();
        tracing::debug!(
            coco = totals.coco_total,
            sugar = totals.sugar_total,
            ratio = self.ratio,
            "container changed"
        );
    }

    fn report_edit(&mut self, edit: Option<ContainerEdit>) {
        if let Some(edit) = edit {
            self.commit(edit);
        }
    }
}
