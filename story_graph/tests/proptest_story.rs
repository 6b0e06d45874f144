use proptest::prelude::*;
use proptest::sample::Index;
use proptest::test_runner::Config;
use story_graph::{parse, Chapter, ChapterId, Story};

/// (text, target slot, dangling)
type RawChoice = (String, Index, bool);

fn raw_chapter() -> impl Strategy<Value = (String, Vec<String>, Vec<RawChoice>)> {
    (
        "\\PC{0,24}",
        prop::collection::vec("\\PC{0,40}", 0..4),
        prop::collection::vec(("\\PC{0,16}", any::<Index>(), any::<bool>()), 0..4),
    )
}

/// Stories with unicode and `/`-containing IDs, empty chapters, cycles, and
/// choices pointing at chapters that do not exist.
fn arb_story() -> impl Strategy<Value = Story> {
    prop::collection::btree_map("[a-zA-Z0-9_/\\-é中]{1,12}", raw_chapter(), 1..8).prop_map(
        |raw| {
            let ids: Vec<String> = raw.keys().cloned().collect();
            raw.into_iter()
                .map(|(id, (title, paragraphs, choices))| {
                    let mut chapter = Chapter::new(title);
                    chapter.paragraphs = paragraphs;
                    for (text, slot, dangling) in choices {
                        let mut target = slot.get(&ids).clone();
                        if dangling {
                            target.push_str("-missing");
                        }
                        chapter = chapter.with_option(text, target);
                    }
                    (ChapterId::new(id), chapter)
                })
                .collect()
        },
    )
}

proptest! {
    #![proptest_config(Config::with_cases(128))]
    #[test]
    fn story_decode_encode_roundtrip(story in arb_story()) {
        let json = story.to_json_string().expect("encode");
        let decoded = parse(json.as_bytes()).expect("decode");
        prop_assert_eq!(&decoded, &story);

        let again = Story::from_json_str(&decoded.to_json_string_pretty().expect("encode"))
            .expect("decode");
        prop_assert_eq!(again, story);
    }

    #[test]
    fn story_reachable_set_stays_inside_story(story in arb_story()) {
        for id in story.chapter_ids() {
            let reachable = story.reachable_from(id.as_str());
            prop_assert!(reachable.contains(id));
            prop_assert!(reachable.iter().all(|r| story.contains(r.as_str())));
        }
    }
}
