use std::io::Write;

use tempfile::NamedTempFile;

use drinking_chocolate_rs::engine::{DeltaLabel, Direction};
use drinking_chocolate_rs::interface::{apply_batch, load_batch};
use drinking_chocolate_rs::models::{ContainerEdit, Substance};
use drinking_chocolate_rs::state::{CalcConfig, ContainerLedger, MixEvent, MixState};
use drinking_chocolate_rs::ContainerRecord;

fn state() -> MixState {
    MixState::new(CalcConfig::default())
}

#[test]
fn test_upsert_same_id_overwrites() {
    let mut state = state();
    state.apply(MixEvent::Edit(ContainerEdit::new("a", Substance::Coco, 30.0)));
    state.apply(MixEvent::Edit(ContainerEdit::new("a", Substance::Sugar, 50.0)));

    assert_eq!(state.ledger().len(), 1);
    let record = state.ledger().get("a").unwrap();
    assert_eq!(record.substance, Substance::Sugar);
    assert_eq!(record.net_weight, 50.0);

    let totals = state.totals();
    assert_eq!(totals.coco_total, 0.0);
    assert_eq!(totals.sugar_total, 50.0);
}

#[test]
fn test_upsert_updates_weight_without_growing() {
    let mut ledger = ContainerLedger::new();
    ledger.upsert(ContainerRecord::new("box-1", Substance::Coco, 10.0));
    ledger.upsert(ContainerRecord::new("box-1", Substance::Coco, 25.0));

    assert_eq!(ledger.len(), 1);
    assert_eq!(ledger.totals().coco_total, 25.0);
}

#[test]
fn test_remove_is_idempotent() {
    let mut ledger = ContainerLedger::new();
    ledger.upsert(ContainerRecord::new("a", Substance::Coco, 10.0));
    ledger.upsert(ContainerRecord::new("b", Substance::Sugar, 20.0));

    ledger.remove("a");
    let once = ledger.records().to_vec();
    ledger.remove("a");

    assert_eq!(ledger.records(), once.as_slice());
}

#[test]
fn test_event_flow() {
    let mut state = state();

    state.apply(MixEvent::AddContainer);
    assert_eq!(state.ledger().len(), 1);
    assert_eq!(state.ledger().records()[0].id, "box-1");

    state.edit_gross_weight("box-1", "106").unwrap();
    assert_eq!(state.totals().coco_total, 40.0);

    let report = state.report();
    assert_eq!(report.balance.sugar_delta, Some(DeltaLabel::Needed(60.0)));

    state.apply(MixEvent::SetRatio { ratio_percent: 50.0 });
    assert_eq!(state.ratio(), 0.5);
    assert_eq!(state.report().balance.required_sugar, Some(40.0));

    state.apply(MixEvent::FineTune {
        direction: Direction::Up,
    });
    assert_eq!(state.ratio(), 0.501);

    state.apply(MixEvent::Delete {
        id: "box-1".to_string(),
    });
    assert!(state.ledger().is_empty());
    assert!(state.forms().is_empty());
}

#[test]
fn test_fine_tune_never_overshoots() {
    let config = CalcConfig {
        default_ratio: 0.98,
        fine_tune_step: 0.007,
        ..CalcConfig::default()
    };
    let mut state = MixState::new(config);

    for _ in 0..10 {
        state.fine_tune(Direction::Up);
    }
    assert_eq!(state.ratio(), 1.0);
}

#[test]
fn test_batch_file_end_to_end() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(
        b"id,substance,container,gross\n\
          jar,Coco,100,180\n\
          tub,Sugar,50,150\n\
          jar,Coco,100,160\n",
    )
    .unwrap();

    let rows = load_batch(file.path()).unwrap();
    let mut state = state();
    apply_batch(&mut state, &rows).unwrap();

    assert_eq!(state.ledger().len(), 2);
    let totals = state.totals();
    assert_eq!(totals.coco_total, 60.0);
    assert_eq!(totals.sugar_total, 100.0);

    let report = state.report();
    assert_eq!(report.balance.required_sugar, Some(90.0));
    assert_eq!(report.balance.sugar_delta, Some(DeltaLabel::Excess(10.0)));
    assert_eq!(report.balance.required_coco, Some(67.0));
    assert_eq!(report.balance.coco_delta, Some(DeltaLabel::Needed(7.0)));
}

#[test]
fn test_upsert_identical_record_is_idempotent() {
    let mut ledger = ContainerLedger::new();
    ledger.upsert(ContainerRecord::new("a", Substance::Coco, 10.0));
    ledger.upsert(ContainerRecord::new("b", Substance::Sugar, 20.0));
    let once = ledger.records().to_vec();
    let totals = ledger.totals();

    ledger.upsert(ContainerRecord::new("a", Substance::Coco, 10.0));

    assert_eq!(ledger.records(), once.as_slice());
    assert_eq!(ledger.totals(), totals);
}

#[test]
fn test_edit_event_survives_later_form_edits() {
    let mut state = state();
    let id = state.add_container();
    state.edit_gross_weight(&id, "76").unwrap();
    assert_eq!(state.totals().coco_total, 10.0);

    state.apply(MixEvent::Edit(ContainerEdit::new(id.clone(), Substance::Sugar, 50.0)));
    let form = state.form(&id).unwrap();
    assert_eq!(form.substance, Substance::Sugar);
    assert_eq!(form.value, 50.0);

    state.edit_gross_weight(&id, "86").unwrap();
    let record = state.ledger().get(&id).unwrap();
    assert_eq!(record.substance, Substance::Sugar);
    assert_eq!(record.net_weight, 20.0);
    assert_eq!(state.totals().coco_total, 0.0);
}

#[test]
fn test_edit_event_for_new_id_gets_a_form() {
    let mut state = state();
    state.add_container();

    state.apply(MixEvent::Edit(ContainerEdit::new("x", Substance::Coco, 5.0)));

    assert_eq!(state.ledger().len(), 2);
    assert_eq!(state.forms().len(), 2);
    let form = state.form("x").unwrap();
    assert_eq!(form.value, 5.0);
    assert!(form.minimised);

    state.delete_container("x");
    assert_eq!(state.ledger().len(), 1);
    assert_eq!(state.forms().len(), 1);
}

#[test]
fn test_unrecognised_substance_stays_out_of_totals() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(
        b"id,substance,container,gross\n\
          m,milk,0,100\n\
          c,coco,0,40\n",
    )
    .unwrap();

    let rows = load_batch(file.path()).unwrap();
    let mut state = state();
    apply_batch(&mut state, &rows).unwrap();

    assert_eq!(state.ledger().get("m").unwrap().substance, Substance::Unset);
    let totals = state.totals();
    assert_eq!(totals.coco_total, 40.0);
    assert_eq!(totals.sugar_total, 0.0);
}
