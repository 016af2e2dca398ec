use tixdesk::core::reconcile::categorize::RULES;
use tixdesk::core::reconcile::{categorize, categorize_with_rule};
use tixdesk::models::Category;

fn cat(s: &str) -> Category {
    categorize(Some(s))
}

#[test]
fn empty_and_missing_sections_are_uncategorized() {
    assert_eq!(cat(""), Category::Uncategorized);
    assert_eq!(cat("   "), Category::Uncategorized);
    assert_eq!(categorize(None), Category::Uncategorized);
    assert_eq!(categorize_with_rule(None).1, Some("empty"));
}

#[test]
fn shuttle_wins_over_everything_else() {
    for s in ["Shuttle", "VIP Shuttle", "shuttle ga+", "GA Shuttle Pass", "SHUTTLE 12"] {
        assert_eq!(cat(s), Category::Shuttle, "{s}");
    }
}

#[test]
fn ga_plus_variants_differ_from_plain_ga() {
    assert_eq!(cat("GA+"), Category::GaPlus);
    assert_eq!(cat("ga plus"), Category::GaPlus);
    assert_eq!(cat("GA Plus Upgrade"), Category::GaPlus);
    assert_eq!(cat("GA"), Category::Ga);
    assert_ne!(cat("GA+"), cat("GA"));
}

#[test]
fn vip_beats_ga_plus() {
    assert_eq!(cat("VIP GA+"), Category::Vip);
    assert_eq!(cat("vip lounge"), Category::Vip);
}

#[test]
fn general_admission_numbered_and_standing_sections_are_ga() {
    for s in [
        "General Admission",
        "general",
        "Section 104",
        "101",
        "Loge 5",
        "Pit",
        "Lawn",
        "Floor",
        "Standing Room",
    ] {
        assert_eq!(cat(s), Category::Ga, "{s}");
    }
}

#[test]
fn unknown_sections_fall_through() {
    for s in ["Balcony", "Suite A", "Mezzanine", "12A"] {
        assert_eq!(categorize_with_rule(Some(s)), (Category::Uncategorized, None), "{s}");
    }
}

#[test]
fn matching_ignores_case_and_surrounding_whitespace() {
    assert_eq!(cat("  vIp  "), Category::Vip);
    assert_eq!(cat("\tSECTION 3 "), Category::Ga);
}

#[test]
fn rules_are_reported_by_name_in_order() {
    let names: Vec<&str> = RULES.iter().map(|r| r.name).collect();
    assert_eq!(
        names,
        [
            "empty",
            "shuttle",
            "vip",
            "ga-plus",
            "ga",
            "general-admission",
            "numbered-section",
            "standing-area"
        ]
    );
    assert_eq!(categorize_with_rule(Some("Section 9")).1, Some("numbered-section"));
    assert_eq!(categorize_with_rule(Some("Lawn")).1, Some("standing-area"));
}
