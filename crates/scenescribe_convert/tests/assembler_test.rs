// Tests for deterministic scene assembly.

use scenescribe_convert::{
    ACTION_FLOWS, AspectRatio, POSES, ScenePlanUnit, SetupRecord, assemble,
};
use scenescribe_error::{ConvertErrorKind, ScenescribeErrorKind};

fn setup_with_background() -> SetupRecord {
    serde_json::from_value(serde_json::json!({
        "character_lock": {
            "CHAR_1": { "id": "CHAR_1", "name": "Mara Chen", "hair": "short, silver" }
        },
        "background_lock": {
            "BACKGROUND_1": { "id": "BACKGROUND_1", "name": "Sunlit kitchen" }
        },
        "visual_style": "STYLE-TEXT",
        "negative_prompt": "NEG-TEXT"
    }))
    .unwrap()
}

fn setup_character_only() -> SetupRecord {
    serde_json::from_value(serde_json::json!({
        "character_lock": {
            "CHAR_1": { "id": "CHAR_1", "name": "Mara Chen" }
        },
        "visual_style": "STYLE-TEXT",
        "negative_prompt": "NEG-TEXT"
    }))
    .unwrap()
}

fn setup_without_character() -> SetupRecord {
    serde_json::from_value(serde_json::json!({
        "character_lock": {},
        "background_lock": {},
        "visual_style": "STYLE-TEXT",
        "negative_prompt": "NEG-TEXT"
    }))
    .unwrap()
}

fn unit(text: &str) -> ScenePlanUnit {
    ScenePlanUnit {
        scene_text: text.to_string(),
        illustration_prompt: "a lone boat drifting through morning fog".to_string(),
    }
}

fn plan_of(n: usize) -> Vec<ScenePlanUnit> {
    (0..n)
        .map(|i| unit(&format!("scene number {i} with a handful of filler words here")))
        .collect()
}

#[test]
fn duration_is_clamped_to_the_window() {
    // 5 words -> raw 2 -> clamped 3; 20 words -> raw 8; 100 words -> raw 40 -> 8
    let five = "one two three four five";
    let twenty = "w ".repeat(20);
    let hundred = "w ".repeat(100);
    let plan = vec![unit(five), unit(twenty.trim()), unit(hundred.trim())];

    let (scenes, stats) =
        assemble(&setup_with_background(), &plan, AspectRatio::Wide, "").unwrap();

    assert_eq!(scenes[0].duration_sec, 3);
    assert_eq!(scenes[1].duration_sec, 8);
    assert_eq!(scenes[2].duration_sec, 8);
    assert_eq!(stats.total_duration_sec, 19);
    assert_eq!(stats.total_words, 125);
}

#[test]
fn four_word_scene_rounds_then_clamps_up() {
    let plan = vec![ScenePlanUnit {
        scene_text: "Two words here total".to_string(),
        illustration_prompt: "x".to_string(),
    }];

    let (scenes, stats) =
        assemble(&setup_with_background(), &plan, AspectRatio::Wide, "").unwrap();

    assert_eq!(scenes.len(), 1);
    assert_eq!(scenes[0].duration_sec, 3); // round(4 / 2.5) = 2, clamped to 3
    assert_eq!(stats.scene_count, 1);
    assert_eq!(stats.total_words, 4);
    assert_eq!(stats.total_duration_sec, 3);
}

#[test]
fn poses_and_action_flows_cycle_past_the_table_length() {
    let plan = plan_of(10);

    let (scenes, _) = assemble(&setup_with_background(), &plan, AspectRatio::Wide, "").unwrap();

    let expression_of = |i: usize| {
        scenes[i].character_lock["CHAR_1"]["expression"]
            .as_str()
            .unwrap()
            .to_string()
    };

    // Scene 8 wraps to template 0, scene 9 to template 1
    assert_eq!(expression_of(8), POSES[0].expression);
    assert_eq!(expression_of(9), POSES[1].expression);
    assert_eq!(
        scenes[8].character_lock["CHAR_1"]["action_flow"]["pre_action"],
        ACTION_FLOWS[0].pre_action
    );
}

#[test]
fn missing_background_yields_empty_background_locks() {
    let plan = plan_of(3);

    let (scenes, _) = assemble(&setup_character_only(), &plan, AspectRatio::Wide, "").unwrap();

    assert_eq!(scenes.len(), 3);
    for scene in &scenes {
        assert!(scene.background_lock.is_empty());
    }
}

#[test]
fn missing_character_fails_with_no_records() {
    let err = assemble(&setup_without_character(), &plan_of(2), AspectRatio::Wide, "")
        .expect_err("assembly without a character must fail");

    match err.kind() {
        ScenescribeErrorKind::Convert(convert) => {
            assert_eq!(convert.kind, ConvertErrorKind::MissingCharacter);
        }
        other => panic!("expected convert error, got {other:?}"),
    }
}

#[test]
fn scene_ids_are_one_based_in_plan_order() {
    let (scenes, _) =
        assemble(&setup_with_background(), &plan_of(4), AspectRatio::Wide, "").unwrap();

    let ids: Vec<&str> = scenes.iter().map(|s| s.scene_id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3", "4"]);
}

#[test]
fn layout_prefix_follows_the_aspect_ratio() {
    let plan = plan_of(1);

    let (wide, _) = assemble(&setup_with_background(), &plan, AspectRatio::Wide, "").unwrap();
    let (tall, _) = assemble(&setup_with_background(), &plan, AspectRatio::Tall, "").unwrap();

    assert!(wide[0].prompt.contains("left third"));
    assert!(tall[0].prompt.contains("top third"));
    assert!(wide[0].prompt.ends_with("a lone boat drifting through morning fog"));
}

#[test]
fn delivery_joins_expression_and_trimmed_voice_instructions() {
    let plan = plan_of(1);

    let (scenes, _) = assemble(
        &setup_with_background(),
        &plan,
        AspectRatio::Wide,
        "  TONE: calm.  ",
    )
    .unwrap();

    let dialogue = &scenes[0].dialogue;
    assert_eq!(dialogue.len(), 1);
    assert_eq!(dialogue[0].speaker, "CHAR_1");
    assert_eq!(dialogue[0].language, "en-US");
    assert_eq!(dialogue[0].delivery, format!("{}. TONE: calm.", POSES[0].expression));
}

#[test]
fn character_attributes_survive_and_pose_fields_win() {
    let setup: SetupRecord = serde_json::from_value(serde_json::json!({
        "character_lock": {
            "CHAR_1": {
                "id": "CHAR_1",
                "name": "Mara Chen",
                "pose": "slouching in a chair",
                "unexpected_field": "kept verbatim"
            }
        },
        "visual_style": "S",
        "negative_prompt": "N"
    }))
    .unwrap();

    let (scenes, _) = assemble(&setup, &plan_of(1), AspectRatio::Wide, "").unwrap();
    let entry = &scenes[0].character_lock["CHAR_1"];

    assert_eq!(entry["name"], "Mara Chen");
    assert_eq!(entry["unexpected_field"], "kept verbatim");
    // Same-named profile attribute is replaced by the scene's pose
    assert_eq!(entry["pose"], POSES[0].pose);
}

#[test]
fn lip_sync_note_embeds_character_and_duration() {
    let (scenes, _) =
        assemble(&setup_with_background(), &plan_of(1), AspectRatio::Wide, "").unwrap();

    let note = &scenes[0].lip_sync_director_note;
    assert!(note.contains("CHAR_1"));
    assert!(note.contains(&format!("{}-second", scenes[0].duration_sec)));
}

#[test]
fn records_serialize_as_independent_json_lines() {
    let (scenes, _) =
        assemble(&setup_with_background(), &plan_of(5), AspectRatio::Wide, "").unwrap();

    let ndjson: Vec<String> = scenes
        .iter()
        .map(|s| serde_json::to_string(s).unwrap())
        .collect();
    let joined = ndjson.join("\n");

    let lines: Vec<&str> = joined.lines().collect();
    assert_eq!(lines.len(), 5);
    for line in lines {
        let value: serde_json::Value = serde_json::from_str(line).unwrap();
        assert!(value["scene_id"].is_string());
        assert_eq!(value["foley_and_ambience"]["music"], "");
    }
}
