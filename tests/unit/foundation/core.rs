use super::*;

#[test]
fn rgb_hex_display_is_uppercase() {
    assert_eq!(Rgb8::new(0x33, 0x66, 0x99).to_string(), "#336699");
    assert_eq!(Rgb8::new(0xab, 0x0c, 0xff).to_string(), "#AB0CFF");
}

#[test]
fn rgb_parse_accepts_optional_hash_and_lowercase() {
    assert_eq!(Rgb8::parse_hex("336699").unwrap(), Rgb8::new(0x33, 0x66, 0x99));
    assert_eq!("#ab0cff".parse::<Rgb8>().unwrap(), Rgb8::new(0xab, 0x0c, 0xff));
    assert!(Rgb8::parse_hex("#12345").is_err());
    assert!(Rgb8::parse_hex("#GG0000").is_err());
}

#[test]
fn rgb_serde_uses_hex_strings() {
    let c: Rgb8 = serde_json::from_value(serde_json::json!("#FF0000")).unwrap();
    assert_eq!(c, Rgb8::new(255, 0, 0));
    assert_eq!(serde_json::to_value(c).unwrap(), serde_json::json!("#FF0000"));
    assert_eq!(c.to_u32(), 0xFF0000);
}

#[test]
fn scene_pos_is_planar() {
    let p = ScenePos::from(Point::new(1.5, -2.0));
    assert_eq!(p.z, 0.0);
    assert_eq!(p.xy(), Point::new(1.5, -2.0));
}
