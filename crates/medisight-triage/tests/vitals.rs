use medisight_triage::vitals::{extract_vitals, extract_vitals_opt};

#[test]
fn extracts_blood_pressure_and_heart_rate() {
    let vitals = extract_vitals("BP is 140/90, heart rate is 88");
    assert_eq!(vitals.blood_pressure.as_deref(), Some("140/90"));
    assert_eq!(vitals.heart_rate.as_deref(), Some("88 bpm"));
}

#[test]
fn heart_rate_reading_must_follow_in_the_same_sentence() {
    let vitals = extract_vitals(
        "Let me check your blood pressure and heart rate. BP is 140/90, heart rate is 88 and regular.",
    );
    assert_eq!(vitals.heart_rate.as_deref(), Some("88 bpm"));
}

#[test]
fn only_first_match_is_used() {
    let vitals = extract_vitals("BP 150/95 this morning, 130/85 tonight");
    assert_eq!(vitals.blood_pressure.as_deref(), Some("150/95"));
}

#[test]
fn extracts_weight_and_temperature() {
    let vitals = extract_vitals("Heart rate 72, weight is stable at 165 lbs. Temperature 98.6 F.");
    assert_eq!(vitals.heart_rate.as_deref(), Some("72 bpm"));
    assert_eq!(vitals.weight.as_deref(), Some("165 lbs"));
    assert_eq!(vitals.temperature.as_deref(), Some("98.6°F"));
}

#[test]
fn absent_fields_are_omitted() {
    let vitals = extract_vitals("BP is 128/82");
    assert!(vitals.heart_rate.is_none());
    assert!(vitals.weight.is_none());

    assert!(extract_vitals_opt("No measurements were taken today.").is_none());
}

#[test]
fn temperature_and_weight_stop_at_sentence_end() {
    let vitals = extract_vitals("Temperature was normal. BP is 128/82.");
    assert!(vitals.temperature.is_none());
    assert_eq!(vitals.blood_pressure.as_deref(), Some("128/82"));

    let vitals = extract_vitals("Weight is unchanged. Heart rate 72.");
    assert!(vitals.weight.is_none());
    assert_eq!(vitals.heart_rate.as_deref(), Some("72 bpm"));
}

#[test]
fn temperature_and_weight_need_a_unit() {
    let vitals = extract_vitals("Temperature 37 C, weight 70.");
    assert!(vitals.temperature.is_none());
    assert!(vitals.weight.is_none());

    let vitals = extract_vitals("Temp 101.2°F and weight 80 kg");
    assert_eq!(vitals.temperature.as_deref(), Some("101.2°F"));
    assert_eq!(vitals.weight.as_deref(), Some("80 kg"));
}
