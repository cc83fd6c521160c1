use astral::numerology::*;
use chrono::NaiveDate;

#[test]
fn test_reduce_master_short_circuit() {
    assert_eq!(reduce(29), 11);
    assert_eq!(reduce(38), 11);
    assert_eq!(reduce(48), 3); // 12 -> 3
    assert_eq!(reduce(0), 0);
}

#[test]
fn test_life_path_two_stage_reduction() {
    // Day 29 -> 11, month 2 -> 2, year 2016 -> 9; 11 + 2 + 9 = 22.
    // Summing first (29 + 2 + 2016 = 2047 -> 13 -> 4) would lose the master number.
    let naive = reduce(29 + 2 + 2016);
    assert_eq!(naive, 4);
    assert_eq!(life_path_number(29, 2, 2016), 22);

    let date = NaiveDate::from_ymd_opt(2016, 2, 29).unwrap();
    assert_eq!(life_path_from_date(date), 22);
}

#[test]
fn test_life_path_ordinary_dates() {
    // 14 -> 5, 7, 1990 -> 1; 13 -> 4
    assert_eq!(life_path_number(14, 7, 1990), 4);
    // 11, 11, 1991 -> 20 -> 2; 11 + 11 + 2 = 24 -> 6
    assert_eq!(life_path_from_str("1991-11-11"), 6);
}

#[test]
fn test_name_numbers_with_accents() {
    // j=1 o=6 s=1 e=5
    assert_eq!(expression_number("José"), 4);
    assert_eq!(soul_urge_number("José"), 11);
    assert_eq!(personality_number("José"), 2);
    assert_eq!(expression_number("JOSE"), expression_number("josé"));
}

#[test]
fn test_vowels_and_consonants_split() {
    // vowels a a o e a e = 19 -> 1, consonants d l v l c = 17 -> 8, all = 36 -> 9
    assert_eq!(soul_urge_number("Ada Lovelace"), 1);
    assert_eq!(personality_number("Ada Lovelace"), 8);
    assert_eq!(expression_number("Ada Lovelace"), 9);
    // y counts as a consonant
    assert_eq!(soul_urge_number("yy"), 0);
    assert_eq!(personality_number("yy"), 5);
}

#[test]
fn test_profile_resolves_details() {
    let date = NaiveDate::from_ymd_opt(2016, 2, 29).unwrap();
    let profile = NumerologyProfile::compute("José", date);

    assert_eq!(profile.life_path.number, 22);
    assert_eq!(profile.life_path.details.unwrap().title, "The Master Builder");
    assert_eq!(profile.soul_urge.number, 11);
    assert_eq!(profile.soul_urge.details.unwrap().number, 11);
    assert_eq!(profile.expression.number, 4);
    assert_eq!(profile.personality.number, 2);
}

#[test]
fn test_profile_empty_name_is_indeterminate() {
    let date = NaiveDate::from_ymd_opt(1990, 7, 14).unwrap();
    let profile = NumerologyProfile::compute("", date);

    assert!(profile.expression.is_indeterminate());
    assert!(profile.expression.details.is_none());
    assert!(profile.soul_urge.is_indeterminate());
    assert!(profile.personality.is_indeterminate());
    assert!(!profile.life_path.is_indeterminate());
}

#[test]
fn test_profile_serializes_camel_case() {
    let date = NaiveDate::from_ymd_opt(1990, 7, 14).unwrap();
    let json = serde_json::to_value(NumerologyProfile::compute("abc", date)).unwrap();
    assert_eq!(json["lifePath"]["number"], 4);
    assert_eq!(json["soulUrge"]["number"], 1);
    assert_eq!(json["lifePath"]["details"]["powerWord"], "Establish");
}
