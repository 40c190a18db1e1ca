use filamentdb_core::{catalog, MaterialFamily, SectionId};
use filamentdb_ui::*;

#[test]
fn test_pla_abs_comparison_in_dataset_order() {
    let mut table = MaterialTable::new(catalog().generic());
    table.toggle_select("ABS");
    table.toggle_select("PLA");
    assert!(table.compare());

    let view = table.render();
    assert!(view.compare_mode);
    assert_eq!(view.column_names(), vec!["PLA", "ABS"]);
    assert!(view.columns.iter().all(|c| !c.show_checkbox));
    for section in &view.sections {
        for row in &section.rows {
            assert_eq!(row.cells.len(), 2, "row {}", row.key);
        }
    }
}

#[test]
fn test_single_selection_leaves_compare_off() {
    let mut table = MaterialTable::new(catalog().bambu());
    table.toggle_select("PLA Basic");
    let view = table.render();
    assert!(!view.compare_enabled);
    assert!(!table.compare());
    assert!(!table.render().compare_mode);
}

#[test]
fn test_exit_compare_leaves_no_checkmarks() {
    let mut table = MaterialTable::new(catalog().esun());
    table.toggle_select("PLA+");
    table.toggle_select("PETG");
    table.compare();
    table.exit_compare();

    let view = table.render();
    assert!(!view.compare_mode);
    assert_eq!(view.selected_count, 0);
    assert_eq!(view.columns.len(), catalog().esun().len());
    assert!(view.columns.iter().all(|c| !c.selected && c.show_checkbox));
}

#[test]
fn test_section_nav_toggle_restores_full_view() {
    let mut table = MaterialTable::new(catalog().bambu());
    let full = table.render().sections.len();

    table.toggle_section(SectionId::Properties);
    let view = table.render();
    assert_eq!(view.sections.len(), 1);
    assert_eq!(view.sections[0].id, SectionId::Properties);
    assert_eq!(view.nav.len(), full);

    table.toggle_section(SectionId::Properties);
    let view = table.render();
    assert_eq!(view.expanded, None);
    assert_eq!(view.sections.len(), full);
}

#[test]
fn test_info_modal_replacement() {
    let mut table = MaterialTable::new(catalog().bambu());
    assert!(table.open_info("toughness"));
    assert!(table.open_info("strength"));
    let modal = table.render().modal.unwrap();
    assert_eq!(modal.key, "strength");
    assert_eq!(modal.title, "Strength");
}

#[test]
fn test_misspelled_info_key_opens_nothing() {
    let mut table = MaterialTable::new(catalog().bambu());
    assert!(!table.open_info("toughnes"));
    assert!(table.render().modal.is_none());
}

#[test]
fn test_rows_without_info_have_no_affordance() {
    let view = MaterialTable::new(catalog().generic()).render();
    assert!(!view.row("price").unwrap().info_available());
    assert!(view.row("ultimateStrength").unwrap().info_available());
}

#[test]
fn test_esun_sentinel_renders_as_text() {
    let view = MaterialTable::new(catalog().esun()).render();
    let col = view.column_names().iter().position(|n| *n == "eTPU-95A").unwrap();
    let row = view.row("izodImpact").unwrap();
    assert_eq!(row.cells[col], Cell::Text("/".to_string()));
}

#[test]
fn test_page_family_switch_discards_state() {
    let mut page = Page::new(catalog(), MaterialFamily::Bambu, ViewMode::Table, BarStyle::default());
    page.view_mut().toggle_section(SectionId::Printer);
    page.view_mut().toggle_info("annealing");
    page.set_family(MaterialFamily::Bambu);

    match page.render() {
        ViewModel::Table(table) => {
            assert_eq!(table.expanded, None);
            assert!(table.modal.is_none());
        }
        ViewModel::Grid(_) => panic!("expected table"),
    }
}

#[test]
fn test_view_model_serializes() {
    let page = Page::new(catalog(), MaterialFamily::Generic, ViewMode::Grid, BarStyle::default());
    let json = serde_json::to_value(page.render()).unwrap();
    assert_eq!(json["view"], "grid");
    assert_eq!(json["family"], "generic");
    assert_eq!(json["cards"][0]["name"], "PLA");
}

#[test]
fn test_generic_stiffness_dialog_matches_rating_cell() {
    let mut table = MaterialTable::new(catalog().generic());
    let info_key = table.render().row("stiffness").unwrap().info_key.unwrap();
    assert!(table.toggle_info(info_key));

    let view = table.render();
    let pla = view.column_names().iter().position(|n| *n == "PLA").unwrap();
    assert_eq!(view.row("stiffness").unwrap().cells[pla].display_text(), "7.5/10");
    let modal = view.modal.unwrap();
    assert!(modal.measurement.contains("0-10 scale"));
    assert!(!modal.measurement.contains("MPa"));
}
