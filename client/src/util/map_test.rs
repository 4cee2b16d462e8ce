use super::*;

#[test]
fn store_map_defaults_to_sabie_at_zoom_13() {
    let config = StoreMapConfig::default();
    assert_eq!(config.center, (-25.0992, 30.7793));
    assert_eq!(config.zoom, 13);
    assert_eq!(
        config.marker_popup_html,
        "<b>Saints Lifestyle Apparel</b><br>Sabie, Mpumalanga, South Africa"
    );
}

#[test]
fn click_popup_text_matches_leaflet_latlng_format() {
    assert_eq!(
        click_popup_text(-25.0992, 30.7793),
        "You clicked the map at LatLng(-25.0992, 30.7793)"
    );
}

#[test]
fn click_popup_text_rounds_to_six_decimals() {
    assert_eq!(
        click_popup_text(-25.123456789, 30.5),
        "You clicked the map at LatLng(-25.123457, 30.5)"
    );
}

#[test]
fn whole_coordinates_drop_the_decimal_point() {
    assert_eq!(click_popup_text(0.0, 31.0), "You clicked the map at LatLng(0, 31)");
}
