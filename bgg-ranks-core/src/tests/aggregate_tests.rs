use super::*;
use crate::error::RecordError;
use crate::item::NOT_RANKED;
use serde_json::json;

fn item(id: u64, category: Category, rank: &str, rating: f64) -> Item {
    Item {
        id,
        name: format!("Game {id}"),
        year: "2020".to_string(),
        rating,
        rank: rank.to_string(),
        weight: 2.0,
        players: "1-4".to_string(),
        time: "30-60".to_string(),
        category,
    }
}

fn ids(items: &[Item]) -> Vec<u64> {
    items.iter().map(|i| i.id).collect()
}

#[test]
fn partitions_by_category() {
    let ranking = Ranking::from_items(vec![
        item(1, Category::Primary, "3", 7.0),
        item(2, Category::Extension, NOT_RANKED, 6.0),
        item(3, Category::Primary, "1", 8.0),
    ]);
    assert_eq!(ids(&ranking.boardgames), vec![3, 1]);
    assert_eq!(ids(&ranking.expansions), vec![2]);
    assert_eq!(ranking.len(), 3);
}

#[test]
fn unranked_sorts_last_and_keeps_input_order() {
    let ranking = Ranking::from_items(vec![
        item(1, Category::Primary, NOT_RANKED, 7.0),
        item(2, Category::Primary, "20", 7.0),
        item(3, Category::Primary, "", 7.0),
        item(4, Category::Primary, "5", 7.0),
        item(5, Category::Primary, NOT_RANKED, 7.0),
    ]);
    assert_eq!(ids(&ranking.boardgames), vec![4, 2, 1, 3, 5]);
}

#[test]
fn equal_ranks_keep_input_order() {
    let ranking = Ranking::from_items(vec![
        item(9, Category::Primary, "7", 7.0),
        item(2, Category::Primary, "7", 7.0),
        item(5, Category::Primary, "1", 7.0),
    ]);
    assert_eq!(ids(&ranking.boardgames), vec![5, 9, 2]);
}

#[test]
fn ranks_compare_numerically() {
    let ranking = Ranking::from_items(vec![
        item(1, Category::Primary, "100", 7.0),
        item(2, Category::Primary, "9", 7.0),
    ]);
    assert_eq!(ids(&ranking.boardgames), vec![2, 1]);
}

#[test]
fn negative_ranks_are_numeric() {
    let ranking = Ranking::from_items(vec![
        item(1, Category::Primary, NOT_RANKED, 7.0),
        item(2, Category::Primary, "5", 7.0),
        item(3, Category::Primary, "-1", 7.0),
    ]);
    assert_eq!(ids(&ranking.boardgames), vec![3, 2, 1]);
}

#[test]
fn expansions_descend_by_rating_stably() {
    let ranking = Ranking::from_items(vec![
        item(1, Category::Extension, NOT_RANKED, 6.0),
        item(2, Category::Extension, NOT_RANKED, 8.2),
        item(3, Category::Extension, NOT_RANKED, 6.0),
        item(4, Category::Extension, NOT_RANKED, 0.0),
    ]);
    assert_eq!(ids(&ranking.expansions), vec![2, 1, 3, 4]);
    assert!(
        ranking
            .expansions
            .windows(2)
            .all(|pair| pair[0].rating >= pair[1].rating)
    );
}

#[test]
fn empty_input_gives_empty_groups() {
    let ranking = Ranking::from_items(Vec::new());
    assert!(ranking.is_empty());
    assert_eq!(process_batch("empty", &[]).unwrap(), Ranking::default());
}

#[test]
fn batch_error_names_collection_and_record() {
    let records = vec![RawRecord::new(json!({ "@type": "boardgame", "@id": "1" }))];
    let err = process_batch("watchlist", &records).unwrap_err();
    assert_eq!(err.collection, "watchlist");
    assert_eq!(err.record_id, "1");
    assert_eq!(err.source, RecordError::MissingField("name"));
    assert!(err.to_string().contains("watchlist"));
}

#[test]
fn batch_rejects_non_finite_rating() {
    let expansion = |id: &str, rating: &str| {
        RawRecord::new(json!({
            "@type": "boardgameexpansion",
            "@id": id,
            "name": { "@type": "primary", "@value": format!("Expansion {id}") },
            "minplayers": { "@value": "2" },
            "maxplayers": { "@value": "4" },
            "minplaytime": { "@value": "30" },
            "maxplaytime": { "@value": "60" },
            "statistics": {
                "ratings": {
                    "average": { "@value": rating },
                    "averageweight": { "@value": "2.1" }
                }
            }
        }))
    };
    let records = vec![expansion("1", "8.2"), expansion("2", "NaN"), expansion("3", "inf")];
    let err = process_batch("addons", &records).unwrap_err();
    assert_eq!(err.record_id, "2");
    assert_eq!(
        err.source,
        RecordError::InvalidNumber {
            field: "average",
            value: "NaN".to_string()
        }
    );
}

#[test]
fn batch_drops_unknown_types() {
    let records = vec![RawRecord::new(json!({ "@type": "rpgitem", "@id": "2" }))];
    assert!(process_batch("misc", &records).unwrap().is_empty());
}

#[test]
fn serializes_without_category() {
    let ranking = Ranking::from_items(vec![item(1, Category::Primary, "1", 7.5)]);
    let json = serde_json::to_value(&ranking).unwrap();
    assert_eq!(json["boardgames"][0]["rank"], "1");
    assert_eq!(json["boardgames"][0]["rating"], 7.5);
    assert!(json["boardgames"][0].get("category").is_none());
    assert_eq!(json["expansions"], json!([]));
}
