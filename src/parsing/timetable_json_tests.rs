#[cfg(test)]
mod tests {
    use crate::parsing::parse_timetable_json;

    /// Test parsing the enveloped payload as it comes from the REST API
    #[test]
    fn test_parse_enveloped_payload() {
        let json = r#"{
            "rooms": [
                {
                    "datum": "2023-05-02",
                    "rtypes": [
                        {
                            "raumtyp": "Hörsaal",
                            "stunden": {
                                "1": { "von": "08:00", "bis": "09:30", "raeume": "G215" },
                                "2": { "von": "09:45", "bis": "11:15", "raeume": "G215, H101" }
                            }
                        }
                    ]
                }
            ]
        }"#;

        let days = parse_timetable_json(json).unwrap();
        assert_eq!(days.len(), 1);
        assert_eq!(days[0].date, "2023-05-02");
        assert_eq!(days[0].room_types[0].hours.len(), 2);
    }

    /// Test parsing a bare array of day records
    #[test]
    fn test_parse_bare_array() {
        let json = r#"[
            { "datum": "2023-05-02", "rtypes": [] },
            { "datum": "2023-05-03", "rtypes": [] }
        ]"#;

        let days = parse_timetable_json(json).unwrap();
        assert_eq!(days.len(), 2);
        assert_eq!(days[1].date, "2023-05-03");
    }

    #[test]
    fn test_parse_empty_rooms() {
        let days = parse_timetable_json(r#"{"rooms": []}"#).unwrap();
        assert!(days.is_empty());
    }

    #[test]
    fn test_invalid_syntax_is_an_error() {
        let result = parse_timetable_json("{not json");
        assert!(result.is_err());
        let msg = format!("{:#}", result.unwrap_err());
        assert!(msg.contains("Invalid JSON syntax"));
    }

    #[test]
    fn test_missing_rooms_key_is_an_error() {
        let result = parse_timetable_json(r#"{"timetable": []}"#);
        assert!(result.is_err());
    }

    /// Test that type mismatches report the JSON path of the bad field
    #[test]
    fn test_error_names_json_path() {
        let json = r#"[
            {
                "datum": "2023-05-02",
                "rtypes": [
                    {
                        "raumtyp": "Hörsaal",
                        "stunden": {
                            "1": { "von": 800, "bis": "09:30", "raeume": "G215" }
                        }
                    }
                ]
            }
        ]"#;

        let err = parse_timetable_json(json).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("von"), "error should name the failing field: {}", msg);
    }
}
