use mindtrack_core::{JournalEntry, MoodEntry, ThoughtRecord};
use serde_json::json;
use uuid::Uuid;

const MOOD_ID: &str = "11111111-2222-4333-8444-555555555555";

#[test]
fn mood_entry_decodes_wire_fields() {
    let entry: MoodEntry = serde_json::from_value(json!({
        "id": MOOD_ID,
        "recorded_at": 1_700_000_000_000_i64,
        "core_emotion": "Fear",
        "primary_emotion": "scared",
        "tertiary_emotion": null,
        "intensity": 7
    }))
    .unwrap();

    assert_eq!(entry.id, Uuid::parse_str(MOOD_ID).unwrap());
    assert_eq!(entry.recorded_at, Some(1_700_000_000_000));
    assert_eq!(entry.labels().collect::<Vec<_>>(), vec!["Fear", "scared"]);
    assert_eq!(entry.intensity, Some(7.0));
}

#[test]
fn malformed_fields_decode_to_empty_values() {
    let entry: MoodEntry = serde_json::from_value(json!({
        "id": MOOD_ID,
        "recorded_at": "yesterday",
        "core_emotion": 42,
        "primary_emotion": "   ",
        "intensity": "not a number"
    }))
    .unwrap();

    assert_eq!(entry.recorded_at, None);
    assert_eq!(entry.labels().count(), 0);
    assert_eq!(entry.intensity, None);
    assert_eq!(entry.effective_intensity(), 0.0);

    let numeric_text: MoodEntry =
        serde_json::from_value(json!({ "id": MOOD_ID, "intensity": " 6.5 " })).unwrap();
    assert_eq!(numeric_text.intensity, Some(6.5));
}

#[test]
fn missing_id_rejects_the_record() {
    let result = serde_json::from_value::<MoodEntry>(json!({ "core_emotion": "joy" }));
    assert!(result.is_err());
}

#[test]
fn journal_tags_accept_lists_and_comma_strings() {
    let entry: JournalEntry = serde_json::from_value(json!({
        "id": Uuid::new_v4(),
        "content": "Walked by the sea",
        "user_tags": ["calm", 3, " ", "grateful "],
        "ai_tags": "peaceful, content ,",
        "tags": { "unexpected": true }
    }))
    .unwrap();

    assert_eq!(entry.user_tags, vec!["calm", "grateful"]);
    assert_eq!(entry.ai_tags, vec!["peaceful", "content"]);
    assert!(entry.tags.is_empty());
    assert_eq!(entry.curated_tags().collect::<Vec<_>>(), vec!["calm", "grateful"]);
}

#[test]
fn thought_record_tolerates_bad_links_and_ratings() {
    let record: ThoughtRecord = serde_json::from_value(json!({
        "id": Uuid::new_v4(),
        "mood_entry_id": "not-a-uuid",
        "automatic_thought": null,
        "emotions": "anxious",
        "cognitive_distortions": ["catastrophizing"],
        "belief_before": "8",
        "belief_after": 5
    }))
    .unwrap();

    assert_eq!(record.mood_entry_id, None);
    assert_eq!(record.automatic_thought, "");
    assert_eq!(record.emotions, vec!["anxious"]);
    assert_eq!(record.rating_delta(), Some(-3.0));
}

#[test]
fn records_serialize_with_snake_case_fields() {
    let mut record = ThoughtRecord::new(Uuid::parse_str(MOOD_ID).unwrap(), "I will fail");
    record.belief_before = Some(7.0);

    let value = serde_json::to_value(&record).unwrap();

    assert_eq!(value["id"], MOOD_ID);
    assert_eq!(value["automatic_thought"], "I will fail");
    assert_eq!(value["belief_before"], 7.0);
    assert!(value["belief_after"].is_null());
    assert!(value["mood_entry_id"].is_null());
}
