use vent::avatar::{AvatarStyle, identity_for, name_hash, normalize, photo_slot};

#[test]
fn same_name_modulo_case_and_spaces_is_stable() {
    for style in [AvatarStyle::Portrait, AvatarStyle::Monogram] {
        let a = identity_for(style, "Jessica Chen", 32);
        assert_eq!(normalize("  jessica   CHEN "), "jessicachen");
        for variant in ["  jessica   CHEN ", "jessicachen", "JessicaChen", "JESSICA\u{feff}CHEN"] {
            assert_eq!(a, identity_for(style, variant, 32), "{style:?} {variant:?}");
        }
    }
}

#[test]
fn empty_seed_is_first_slot() {
    assert_eq!(name_hash(""), 0);
    let slot = photo_slot("");
    assert_eq!((slot.category, slot.index), (0, 1));
    assert_eq!(
        identity_for(AvatarStyle::Portrait, " ", 40),
        "https://randomuser.me/api/portraits/men/1.jpg"
    );
}

#[test]
fn known_names_map_to_known_portraits() {
    assert_eq!(name_hash("bradthompson"), 228_007_655);
    assert_eq!(
        identity_for(AvatarStyle::Portrait, "Brad Thompson", 32),
        "https://randomuser.me/api/portraits/women/62.jpg"
    );
    assert_eq!(
        identity_for(AvatarStyle::Portrait, "Jane Doe", 40),
        "https://randomuser.me/api/portraits/men/34.jpg"
    );
}

#[test]
fn indices_stay_in_range() {
    for i in 0..500 {
        let slot = photo_slot(&format!("person number {i}"));
        assert!(slot.category < 2);
        assert!((1..=99).contains(&slot.index));
        assert!(slot.photo_id < 1000);
    }
}
