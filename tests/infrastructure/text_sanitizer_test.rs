use packslip::infrastructure::text_processing::sanitize_extracted_text;

#[test]
fn given_ragged_whitespace_when_sanitizing_then_collapses_internal_runs() {
    let result = sanitize_extracted_text("4512   Rue\tSaint-Denis");
    assert_eq!(result, "4512 Rue Saint-Denis");
}

#[test]
fn given_blank_lines_when_sanitizing_then_drops_them_but_keeps_line_structure() {
    let result = sanitize_extracted_text("Gingras Construction\n\n\n4512 Rue Saint-Denis\nMontréal");
    assert_eq!(result, "Gingras Construction\n4512 Rue Saint-Denis\nMontréal");
}

#[test]
fn given_ligatures_when_sanitizing_then_nfkc_folds_them() {
    let result = sanitize_extracted_text("ﬁche d'expédition");
    assert_eq!(result, "fiche d'expédition");
}

#[test]
fn given_accented_text_when_sanitizing_then_accents_survive() {
    let result = sanitize_extracted_text("  Montréal, Québec  ");
    assert_eq!(result, "Montréal, Québec");
}

#[test]
fn given_empty_page_when_sanitizing_then_returns_empty_string() {
    assert_eq!(sanitize_extracted_text("   \n \t \n"), "");
}
