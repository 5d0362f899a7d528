use super::*;
use bgg_ranks_core::{Category, NOT_RANKED, process_batch};

const THINGS_XML: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<items termsofuse="https://boardgamegeek.com/xmlapi/termsofuse">
    <item type="boardgame" id="13">
        <thumbnail>https://cf.geekdo-images.com/thumb.jpg</thumbnail>
        <name type="primary" sortindex="1" value="CATAN"/>
        <name type="alternate" sortindex="1" value="Die Siedler von Catan"/>
        <description>Trade, build &amp; settle&#10;the island.</description>
        <yearpublished value="1995"/>
        <minplayers value="3"/>
        <maxplayers value="4"/>
        <playingtime value="120"/>
        <minplaytime value="60"/>
        <maxplaytime value="120"/>
        <statistics page="1">
            <ratings>
                <usersrated value="120000"/>
                <average value="7.09846"/>
                <ranks>
                    <rank type="subtype" id="1" name="boardgame" friendlyname="Board Game Rank" value="561" bayesaverage="6.9"/>
                    <rank type="family" id="5497" name="strategygames" friendlyname="Strategy Game Rank" value="449" bayesaverage="6.8"/>
                </ranks>
                <averageweight value="2.2891"/>
            </ratings>
        </statistics>
    </item>
    <item type="boardgameexpansion" id="325">
        <name type="primary" sortindex="1" value="Catan: Seafarers"/>
        <yearpublished value="1997"/>
        <minplayers value="3"/>
        <maxplayers value="4"/>
        <minplaytime value="60"/>
        <maxplaytime value="90"/>
        <statistics page="1">
            <ratings>
                <average value=""/>
                <ranks>
                    <rank type="subtype" id="1" name="boardgame" value="Not Ranked"/>
                </ranks>
                <averageweight value=""/>
            </ratings>
        </statistics>
    </item>
</items>"#;

#[test]
fn attributes_and_children_become_keys() {
    let doc = parse_document(THINGS_XML).unwrap();
    let items = &doc["items"];
    assert_eq!(
        items["@termsofuse"],
        "https://boardgamegeek.com/xmlapi/termsofuse"
    );
    assert!(items["item"].is_array());
    assert_eq!(items["item"][0]["@id"], "13");
    assert_eq!(items["item"][0]["yearpublished"]["@value"], "1995");
}

#[test]
fn repeated_children_become_lists() {
    let doc = parse_document(THINGS_XML).unwrap();
    let catan = &doc["items"]["item"][0];
    assert_eq!(catan["name"].as_array().unwrap().len(), 2);
    assert_eq!(
        catan["statistics"]["ratings"]["ranks"]["rank"]
            .as_array()
            .unwrap()
            .len(),
        2
    );

    let seafarers = &doc["items"]["item"][1];
    assert!(seafarers["name"].is_object());
    assert!(seafarers["statistics"]["ratings"]["ranks"]["rank"].is_object());
}

#[test]
fn text_is_unescaped() {
    let doc = parse_document(THINGS_XML).unwrap();
    let catan = &doc["items"]["item"][0];
    assert_eq!(catan["description"], "Trade, build & settle\nthe island.");
    assert_eq!(catan["thumbnail"], "https://cf.geekdo-images.com/thumb.jpg");
}

#[test]
fn mixed_and_empty_elements() {
    let doc = parse_document(r#"<root><a x="1">hi</a><b/><c></c></root>"#).unwrap();
    assert_eq!(doc["root"]["a"]["@x"], "1");
    assert_eq!(doc["root"]["a"]["#text"], "hi");
    assert!(doc["root"]["b"].is_null());
    assert!(doc["root"]["c"].is_null());
}

#[test]
fn malformed_xml_is_an_error() {
    assert!(parse_document("<items><item></items>").is_err());
    assert!(parse_document("<items><item>").is_err());
}

#[test]
fn records_handle_one_many_and_none() {
    let many = records_from_document(parse_document(THINGS_XML).unwrap()).unwrap();
    assert_eq!(many.len(), 2);

    let one = records_from_document(
        parse_document(r#"<items><item type="boardgame" id="1"/></items>"#).unwrap(),
    )
    .unwrap();
    assert_eq!(one.len(), 1);
    assert_eq!(one[0].id_hint(), "1");

    let none =
        records_from_document(parse_document(r#"<items termsofuse="x"></items>"#).unwrap())
            .unwrap();
    assert!(none.is_empty());

    let bare = records_from_document(parse_document("<items/>").unwrap()).unwrap();
    assert!(bare.is_empty());
}

#[test]
fn missing_items_element_is_an_error() {
    let doc = parse_document("<things/>").unwrap();
    assert!(matches!(
        records_from_document(doc),
        Err(ApiError::Response(_))
    ));
}

#[test]
fn service_errors_are_reported() {
    let doc = parse_document(
        r#"<?xml version="1.0" encoding="utf-8"?><error><message>Rate limit exceeded.</message></error>"#,
    )
    .unwrap();
    match records_from_document(doc) {
        Err(ApiError::Service(msg)) => assert_eq!(msg, "Rate limit exceeded."),
        other => panic!("expected service error, got {other:?}"),
    }

    let doc = parse_document(
        r#"<errors><error><message>Invalid thing id</message></error></errors>"#,
    )
    .unwrap();
    assert_eq!(service_error(&doc).as_deref(), Some("Invalid thing id"));
}

#[test]
fn response_flows_through_core() {
    let records = records_from_document(parse_document(THINGS_XML).unwrap()).unwrap();
    let ranking = process_batch("shelf", &records).unwrap();

    assert_eq!(ranking.boardgames.len(), 1);
    let catan = &ranking.boardgames[0];
    assert_eq!(catan.name, "CATAN");
    assert_eq!(catan.rank, "561");
    assert_eq!(catan.weight, 2.29);
    assert_eq!(catan.category, Category::Primary);

    assert_eq!(ranking.expansions.len(), 1);
    let seafarers = &ranking.expansions[0];
    assert_eq!(seafarers.rank, NOT_RANKED);
    assert_eq!(seafarers.rating, 0.0);
    assert_eq!(seafarers.time, "60-90");
}

const HOT_XML: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<items termsofuse="https://boardgamegeek.com/xmlapi/termsofuse">
    <item id="361" rank="2">
        <thumbnail value="https://cf.geekdo-images.com/a.jpg"/>
        <name value="Second Game"/>
        <yearpublished value="2023"/>
    </item>
    <item id="174430" rank="1">
        <thumbnail value="https://cf.geekdo-images.com/b.jpg"/>
        <name value="Gloomhaven"/>
        <yearpublished value="2017"/>
    </item>
    <item id="999" rank="3">
        <name value="No Year"/>
    </item>
</items>"#;

#[test]
fn hot_list_is_ordered_by_rank() {
    let hot = hot_items_from_document(parse_document(HOT_XML).unwrap()).unwrap();
    assert_eq!(hot.len(), 3);
    assert_eq!(
        hot[0],
        HotItem {
            id: 174430,
            rank: 1,
            name: "Gloomhaven".to_string(),
            year: "2017".to_string(),
        }
    );
    assert_eq!(hot[1].id, 361);
    assert_eq!(hot[2].year, "");
}

#[test]
fn hot_list_rejects_bad_rank() {
    let doc = parse_document(r#"<items><item id="1" rank="top"><name value="X"/></item></items>"#)
        .unwrap();
    assert!(hot_items_from_document(doc).is_err());
}
