use anyhow::Result;
use openrtb_bid::{Bid, MultiString};
use serde_json::{json, Value};

fn full_bid() -> Bid {
    Bid {
        id: "bid-1".to_string(),
        imp_id: "imp-1".to_string(),
        price: 2.75,
        ad_id: "ad-9".to_string(),
        nurl: "https://bidder.example/win?price=${AUCTION_PRICE}".to_string(),
        ad_markup: "<div>ad</div>".to_string(),
        adv_domain: vec!["advertiser.example".to_string(), "brand.example".to_string()],
        bundle: "com.example.app".to_string(),
        iurl: "https://cdn.example/sample.png".to_string(),
        campaign_id: MultiString::from("cmp-3"),
        creative_id: "cr-12".to_string(),
        cat: vec!["IAB1".to_string(), "IAB2-3".to_string()],
        attr: vec![1, 6],
        api: 3,
        protocol: 2,
        qag_media_rating: 1,
        deal_id: "deal-88".to_string(),
        h: 250,
        w: 300,
        exp: 120,
        ext: Some(json!({"vendor": {"flag": true}})),
    }
}

#[test]
fn test_full_record_uses_exact_wire_names() -> Result<()> {
    let encoded = full_bid().to_json()?;
    let value: Value = serde_json::from_str(&encoded)?;
    let object = value.as_object().expect("bid serializes as an object");

    let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
    keys.sort_unstable();

    let mut expected = vec![
        "id",
        "impid",
        "price",
        "adid",
        "nurl",
        "adm",
        "adomain",
        "bundle",
        "iurl",
        "cid",
        "crid",
        "cat",
        "attr",
        "api",
        "protocol",
        "qagmediarating",
        "dealid",
        "h",
        "w",
        "exp",
        "ext",
    ];
    expected.sort_unstable();

    assert_eq!(keys, expected);
    assert_eq!(object["cid"], json!("cmp-3"));
    assert_eq!(object["adomain"], json!(["advertiser.example", "brand.example"]));
    Ok(())
}

#[test]
fn test_empty_optional_fields_are_omitted() -> Result<()> {
    let bid = Bid {
        id: "bid-1".to_string(),
        imp_id: "imp-1".to_string(),
        price: 0.0,
        ..Bid::default()
    };

    let value: Value = serde_json::from_str(&bid.to_json()?)?;
    let object = value.as_object().expect("bid serializes as an object");

    let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, vec!["id", "impid", "price"]);
    Ok(())
}

#[test]
fn test_wire_round_trip_preserves_record() -> Result<()> {
    let bid = full_bid();
    let decoded = Bid::from_json(&bid.to_json()?)?;
    assert_eq!(decoded, bid);
    Ok(())
}

#[test]
fn test_numeric_campaign_id_reserializes_quoted() -> Result<()> {
    let bid = Bid::from_json(r#"{"id":"b1","impid":"i1","price":1.5,"cid":9.75}"#)?;
    let value: Value = serde_json::from_str(&bid.to_json()?)?;
    assert_eq!(value["cid"], json!("9.75"));
    Ok(())
}
