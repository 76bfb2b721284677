use checkip_domain::ResponseFormat;

#[test]
fn test_content_types() {
    assert_eq!(ResponseFormat::Text.content_type(), "text/plain");
    assert_eq!(ResponseFormat::Json.content_type(), "application/json");
    assert_eq!(ResponseFormat::Html.content_type(), "text/html");
    assert_eq!(ResponseFormat::Prometheus.content_type(), "text/plain");
}

#[test]
fn test_from_str_round_trips_every_format() {
    for format in ResponseFormat::ALL {
        assert_eq!(format.as_str().parse::<ResponseFormat>(), Ok(format));
    }
}

#[test]
fn test_from_str_is_case_sensitive() {
    assert!("JSON".parse::<ResponseFormat>().is_err());
    assert!("xml".parse::<ResponseFormat>().is_err());
    assert!("".parse::<ResponseFormat>().is_err());
}
