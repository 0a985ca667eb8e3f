#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use serde_json::json;

    use crate::api::utils::extract_rows;
    use crate::models::Endpoint;

    #[test]
    fn known_endpoints_parse() {
        assert_eq!(
            Endpoint::from_str("campaigns/feeds").unwrap(),
            Endpoint::CampaignFeeds
        );
        assert_eq!(
            Endpoint::from_str("campaigns/active").unwrap(),
            Endpoint::CampaignActive
        );
        assert_eq!(
            Endpoint::from_str("account/apikeys").unwrap(),
            Endpoint::AccountApiKeys
        );
        assert_eq!(
            Endpoint::from_str("account/medias").unwrap(),
            Endpoint::AccountMedias
        );
    }

    #[test]
    fn unknown_endpoint_fails_to_parse() {
        assert!(Endpoint::from_str("campaigns/archived").is_err());
    }

    #[test]
    fn default_allow_list_covers_known_endpoints() {
        let allowed = Endpoint::default_allow_list();
        assert_eq!(allowed.len(), 4);
        assert!(allowed.contains(&"account/medias".to_string()));
    }

    #[test]
    fn feeds_rows_keep_input_order() {
        let data = json!([{"name": "a"}, {"name": "b"}, {"name": "c"}]);
        let rows = extract_rows(Endpoint::CampaignFeeds, &data).unwrap();

        let ids: Vec<&str> = rows.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(ids, vec!["0", "1", "2"]);
    }

    #[test]
    fn feeds_reject_non_list_data() {
        let data = json!({"name": "a"});
        let err = extract_rows(Endpoint::CampaignFeeds, &data).unwrap_err();

        assert!(err.to_string().contains("campaigns/feeds"));
    }

    #[test]
    fn apikeys_accept_keyed_object() {
        let data = json!({
            "primary": {"key": "abc", "active": true},
            "backup": {"key": "def", "active": false}
        });
        let rows = extract_rows(Endpoint::AccountApiKeys, &data).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].0, "primary");
        assert_eq!(rows[1].0, "backup");
    }

    #[test]
    fn apikeys_accept_plain_list() {
        let data = json!([{"key": "abc"}, {"key": "def"}]);
        let rows = extract_rows(Endpoint::AccountApiKeys, &data).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].0, "0");
    }

    #[test]
    fn medias_tabulate_the_medias_field() {
        // sibling fields next to medias must not leak into the rows
        let data = json!({
            "account": "pub-1",
            "total": 2,
            "medias": [
                {"id": 1, "domain": "one.example"},
                {"id": 2, "domain": "two.example"}
            ]
        });
        let rows = extract_rows(Endpoint::AccountMedias, &data).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].1["domain"], "one.example");
    }

    #[test]
    fn medias_without_list_fail_closed() {
        let data = json!({"account": "pub-1"});
        assert!(extract_rows(Endpoint::AccountMedias, &data).is_err());
    }
}
