//! CSS named colors mapped onto the DDD default theme palette
//!
//! Only keyword colors are recognised. Hex, `rgb()`, `hsl()` and custom
//! properties have no suggestion.

/// Every CSS named color, sorted by name for binary search
pub const NAMED_COLORS: &[(&str, &str)] = &[
    ("aliceblue", "--ddd-theme-default-skyMaxlight"),
    ("antiquewhite", "--ddd-theme-default-shrineMaxLight"),
    ("aqua", "--ddd-theme-default-creekLight"),
    ("aquamarine", "--ddd-theme-default-creekLight"),
    ("azure", "--ddd-theme-default-skyMaxlight"),
    ("beige", "--ddd-theme-default-shrineLight"),
    ("bisque", "--ddd-theme-default-shrineLight"),
    ("black", "--ddd-theme-default-coalyGray"),
    ("blanchedalmond", "--ddd-theme-default-shrineMaxLight"),
    ("blue", "--ddd-theme-default-skyBlue"),
    ("blueviolet", "--ddd-theme-default-athertonViolet"),
    ("brown", "--ddd-theme-default-landgrantBrown"),
    ("burlywood", "--ddd-theme-default-shrineTan"),
    ("cadetblue", "--ddd-theme-default-creekTeal"),
    ("chartreuse", "--ddd-theme-default-futureLime"),
    ("chocolate", "--ddd-theme-default-landgrantBrown"),
    ("coral", "--ddd-theme-default-discoveryCoral"),
    ("cornflowerblue", "--ddd-theme-default-pughBlue"),
    ("cornsilk", "--ddd-theme-default-shrineMaxLight"),
    ("crimson", "--ddd-theme-default-original87Pink"),
    ("cyan", "--ddd-theme-default-creekLight"),
    ("darkblue", "--ddd-theme-default-nittanyNavy"),
    ("darkcyan", "--ddd-theme-default-creekTeal"),
    ("darkgoldenrod", "--ddd-theme-default-roarGolden"),
    ("darkgray", "--ddd-theme-default-limestoneGray"),
    ("darkgreen", "--ddd-theme-default-forestGreen"),
    ("darkgrey", "--ddd-theme-default-limestoneGray"),
    ("darkkhaki", "--ddd-theme-default-roarLight"),
    ("darkmagenta", "--ddd-theme-default-wonderPurple"),
    ("darkolivegreen", "--ddd-theme-default-forestGreen"),
    ("darkorange", "--ddd-theme-default-inventOrange"),
    ("darkorchid", "--ddd-theme-default-athertonViolet"),
    ("darkred", "--ddd-theme-default-original87Pink"),
    ("darksalmon", "--ddd-theme-default-discoveryCoral"),
    ("darkseagreen", "--ddd-theme-default-opportunityGreen"),
    ("darkslateblue", "--ddd-theme-default-wonderPurple"),
    ("darkslategray", "--ddd-theme-default-slateGray"),
    ("darkslategrey", "--ddd-theme-default-slateGray"),
    ("darkturquoise", "--ddd-theme-default-creekTeal"),
    ("darkviolet", "--ddd-theme-default-wonderPurple"),
    ("deeppink", "--ddd-theme-default-original87Pink"),
    ("deepskyblue", "--ddd-theme-default-skyBlue"),
    ("dimgray", "--ddd-theme-default-slateGray"),
    ("dimgrey", "--ddd-theme-default-slateGray"),
    ("dodgerblue", "--ddd-theme-default-skyBlue"),
    ("firebrick", "--ddd-theme-default-original87Pink"),
    ("floralwhite", "--ddd-theme-default-shrineMaxLight"),
    ("forestgreen", "--ddd-theme-default-forestGreen"),
    ("fuchsia", "--ddd-theme-default-athertonViolet"),
    ("gainsboro", "--ddd-theme-default-limestoneLight"),
    ("ghostwhite", "--ddd-theme-default-white"),
    ("gold", "--ddd-theme-default-keystoneYellow"),
    ("goldenrod", "--ddd-theme-default-roarGolden"),
    ("gray", "--ddd-theme-default-limestoneGray"),
    ("green", "--ddd-theme-default-forestGreen"),
    ("greenyellow", "--ddd-theme-default-futureLime"),
    ("grey", "--ddd-theme-default-limestoneGray"),
    ("honeydew", "--ddd-theme-default-creekMaxLight"),
    ("hotpink", "--ddd-theme-default-original87Pink"),
    ("indianred", "--ddd-theme-default-discoveryCoral"),
    ("indigo", "--ddd-theme-default-wonderPurple"),
    ("ivory", "--ddd-theme-default-shrineMaxLight"),
    ("khaki", "--ddd-theme-default-roarLight"),
    ("lavender", "--ddd-theme-default-skyMaxlight"),
    ("lavenderblush", "--ddd-theme-default-shrineMaxLight"),
    ("lawngreen", "--ddd-theme-default-futureLime"),
    ("lemonchiffon", "--ddd-theme-default-roarMaxlight"),
    ("lightblue", "--ddd-theme-default-pughBlue"),
    ("lightcoral", "--ddd-theme-default-discoveryCoral"),
    ("lightcyan", "--ddd-theme-default-creekMaxLight"),
    ("lightgoldenrodyellow", "--ddd-theme-default-roarMaxlight"),
    ("lightgray", "--ddd-theme-default-limestoneLight"),
    ("lightgreen", "--ddd-theme-default-futureLime"),
    ("lightgrey", "--ddd-theme-default-limestoneLight"),
    ("lightpink", "--ddd-theme-default-discoveryCoral"),
    ("lightsalmon", "--ddd-theme-default-discoveryCoral"),
    ("lightseagreen", "--ddd-theme-default-creekTeal"),
    ("lightskyblue", "--ddd-theme-default-skyLight"),
    ("lightslategray", "--ddd-theme-default-slateLight"),
    ("lightslategrey", "--ddd-theme-default-slateLight"),
    ("lightsteelblue", "--ddd-theme-default-pughBlue"),
    ("lightyellow", "--ddd-theme-default-roarMaxlight"),
    ("lime", "--ddd-theme-default-futureLime"),
    ("limegreen", "--ddd-theme-default-futureLime"),
    ("linen", "--ddd-theme-default-shrineMaxLight"),
    ("magenta", "--ddd-theme-default-athertonViolet"),
    ("maroon", "--ddd-theme-default-landgrantBrown"),
    ("mediumaquamarine", "--ddd-theme-default-creekLight"),
    ("mediumblue", "--ddd-theme-default-beaverBlue"),
    ("mediumorchid", "--ddd-theme-default-athertonViolet"),
    ("mediumpurple", "--ddd-theme-default-athertonViolet"),
    ("mediumseagreen", "--ddd-theme-default-opportunityGreen"),
    ("mediumslateblue", "--ddd-theme-default-athertonViolet"),
    ("mediumspringgreen", "--ddd-theme-default-opportunityGreen"),
    ("mediumturquoise", "--ddd-theme-default-creekTeal"),
    ("mediumvioletred", "--ddd-theme-default-original87Pink"),
    ("midnightblue", "--ddd-theme-default-potentialMidnight"),
    ("mintcream", "--ddd-theme-default-creekMaxLight"),
    ("mistyrose", "--ddd-theme-default-shrineMaxLight"),
    ("moccasin", "--ddd-theme-default-roarMaxlight"),
    ("navajowhite", "--ddd-theme-default-roarLight"),
    ("navy", "--ddd-theme-default-nittanyNavy"),
    ("oldlace", "--ddd-theme-default-shrineMaxLight"),
    ("olive", "--ddd-theme-default-forestGreen"),
    ("olivedrab", "--ddd-theme-default-forestGreen"),
    ("orange", "--ddd-theme-default-inventOrange"),
    ("orangered", "--ddd-theme-default-inventOrange"),
    ("orchid", "--ddd-theme-default-athertonViolet"),
    ("palegoldenrod", "--ddd-theme-default-roarLight"),
    ("palegreen", "--ddd-theme-default-futureLime"),
    ("paleturquoise", "--ddd-theme-default-creekMaxLight"),
    ("palevioletred", "--ddd-theme-default-original87Pink"),
    ("papayawhip", "--ddd-theme-default-shrineMaxLight"),
    ("peachpuff", "--ddd-theme-default-shrineLight"),
    ("peru", "--ddd-theme-default-roarGolden"),
    ("pink", "--ddd-theme-default-discoveryCoral"),
    ("plum", "--ddd-theme-default-athertonViolet"),
    ("powderblue", "--ddd-theme-default-skyLight"),
    ("purple", "--ddd-theme-default-wonderPurple"),
    ("rebeccapurple", "--ddd-theme-default-wonderPurple"),
    ("red", "--ddd-theme-default-original87Pink"),
    ("rosybrown", "--ddd-theme-default-shrineTan"),
    ("royalblue", "--ddd-theme-default-beaverBlue"),
    ("saddlebrown", "--ddd-theme-default-landgrantBrown"),
    ("salmon", "--ddd-theme-default-discoveryCoral"),
    ("sandybrown", "--ddd-theme-default-roarGolden"),
    ("seagreen", "--ddd-theme-default-opportunityGreen"),
    ("seashell", "--ddd-theme-default-shrineMaxLight"),
    ("sienna", "--ddd-theme-default-landgrantBrown"),
    ("silver", "--ddd-theme-default-limestoneGray"),
    ("skyblue", "--ddd-theme-default-skyLight"),
    ("slateblue", "--ddd-theme-default-athertonViolet"),
    ("slategray", "--ddd-theme-default-slateGray"),
    ("slategrey", "--ddd-theme-default-slateGray"),
    ("snow", "--ddd-theme-default-white"),
    ("springgreen", "--ddd-theme-default-opportunityGreen"),
    ("steelblue", "--ddd-theme-default-beaverBlue"),
    ("tan", "--ddd-theme-default-shrineTan"),
    ("teal", "--ddd-theme-default-creekTeal"),
    ("thistle", "--ddd-theme-default-athertonViolet"),
    ("tomato", "--ddd-theme-default-discoveryCoral"),
    ("turquoise", "--ddd-theme-default-creekTeal"),
    ("violet", "--ddd-theme-default-athertonViolet"),
    ("wheat", "--ddd-theme-default-shrineLight"),
    ("white", "--ddd-theme-default-white"),
    ("whitesmoke", "--ddd-theme-default-limestoneMaxLight"),
    ("yellow", "--ddd-theme-default-keystoneYellow"),
    ("yellowgreen", "--ddd-theme-default-futureLime"),
];

/// Case-insensitive exact lookup of a named color
pub fn color(value: &str) -> Option<&'static str> {
    let key = value.trim().to_lowercase();
    NAMED_COLORS
        .binary_search_by(|(name, _)| name.cmp(&key.as_str()))
        .ok()
        .map(|idx| NAMED_COLORS[idx].1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_table_is_sorted_and_complete() {
        assert!(NAMED_COLORS.windows(2).all(|pair| pair[0].0 < pair[1].0));
        assert_eq!(NAMED_COLORS.len(), 148);
        for (name, token) in NAMED_COLORS {
            assert!(token.starts_with("--ddd-theme-default-"), "{name}");
        }
    }

    #[rstest]
    #[case("red", "--ddd-theme-default-original87Pink")]
    #[case("RED", "--ddd-theme-default-original87Pink")]
    #[case("white", "--ddd-theme-default-white")]
    #[case(" Navy ", "--ddd-theme-default-nittanyNavy")]
    #[case("rebeccapurple", "--ddd-theme-default-wonderPurple")]
    fn test_named_colors(#[case] value: &str, #[case] token: &str) {
        assert_eq!(color(value), Some(token));
    }

    #[rstest]
    #[case("#ff0000")]
    #[case("rgb(255, 0, 0)")]
    #[case("hsl(0, 100%, 50%)")]
    #[case("var(--brand)")]
    #[case("red !important")]
    #[case("transparent")]
    fn test_unrecognised_colors(#[case] value: &str) {
        assert_eq!(color(value), None);
    }
}
