//! Keycode decoding for layout rendering.
//!
//! This module turns raw Vial keycode tokens (string identifiers or the
//! integer `-1` placeholder) into a short display form plus a semantic
//! class used for color coding. Decoding is a pure, total function: every
//! input produces a [`DecodedKey`], and malformed tokens degrade to a
//! best-effort abbreviation instead of failing.
//!
//! Several wrapper forms share the same function-call surface shape
//! (`LCTL_T(..)`, `LT1(..)`, `LSFT(..)`, ...), so the match order below is
//! a contract: rules are tried top to bottom and the first match wins.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// A raw per-key token as stored in a layout grid cell.
///
/// Vial layout files mix string identifiers (`"KC_A"`, `"LT1(KC_SPACE)"`)
/// with the integer placeholder `-1` for positions that have no key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Keycode {
    /// Integer form (the `-1` placeholder, or a bare numeric keycode)
    Raw(i64),
    /// String identifier form
    Code(String),
}

impl From<&str> for Keycode {
    fn from(code: &str) -> Self {
        Self::Code(code.to_string())
    }
}

impl From<i64> for Keycode {
    fn from(raw: i64) -> Self {
        Self::Raw(raw)
    }
}

/// Semantic class of a decoded key, used to select a display style.
///
/// Exactly one class applies per token, and the class is a function of the
/// token's surface form only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SemanticClass {
    /// Regular alphanumeric and plain keys
    Alpha,
    /// Mod-tap keys (e.g., `LCTL_T(KC_A)`)
    ModTap,
    /// Layer-tap keys (e.g., `LT1(KC_SPACE)`)
    LayerTap,
    /// Macro references (M0, M1, ...)
    Macro,
    /// Transparent keys (`KC_TRNS`)
    Transparent,
    /// Pure modifier keys
    Modifier,
    /// Special function keys
    Special,
    /// Empty positions (`-1`, `KC_NO`)
    Empty,
}

impl std::fmt::Display for SemanticClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Alpha => "alpha",
            Self::ModTap => "mod-tap",
            Self::LayerTap => "layer-tap",
            Self::Macro => "macro",
            Self::Transparent => "transparent",
            Self::Modifier => "modifier",
            Self::Special => "special",
            Self::Empty => "empty",
        };
        write!(f, "{name}")
    }
}

/// A decoded key: display text, semantic class, and the token it came from.
///
/// `display` holds one or two lines separated by `\n`; tap-type keys carry
/// the base key on the first line and the hold qualifier on the second.
/// `raw` is the token in its normalized string form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodedKey {
    /// Display text, up to two `\n`-separated lines
    pub display: String,
    /// Semantic class for presentation styling
    pub class: SemanticClass,
    /// The normalized source token
    pub raw: String,
}

/// Shifted symbols for `LSFT(KC_x)` combinations.
const SHIFTED_SYMBOLS: &[(&str, &str)] = &[
    ("1", "!"),
    ("2", "@"),
    ("3", "#"),
    ("4", "$"),
    ("5", "%"),
    ("6", "^"),
    ("7", "&"),
    ("8", "*"),
    ("9", "("),
    ("0", ")"),
    ("MINUS", "_"),
    ("EQUAL", "="),
    ("LBRACKET", "{"),
    ("RBRACKET", "}"),
    ("BSLASH", "|"),
    ("SCOLON", ":"),
    ("QUOTE", "\""),
    ("GRAVE", "~"),
    ("COMMA", "<"),
    ("DOT", ">"),
    ("SLASH", "?"),
];

/// Short names for the hold half of mod-tap keys. Left and right variants
/// share one abbreviation.
const MOD_SHORT: &[(&str, &str)] = &[
    ("CTL", "Ctl"),
    ("SFT", "Sft"),
    ("ALT", "Alt"),
    ("GUI", "Gui"),
];

/// Display names for basic keycodes (after the `KC_` prefix is stripped).
const KEY_NAMES: &[(&str, &str)] = &[
    ("SPACE", "Spc"),
    ("BSPACE", "Bsp"),
    ("DELETE", "Del"),
    ("ENTER", "Ent"),
    ("TAB", "Tab"),
    ("ESCAPE", "Esc"),
    ("CAPSLOCK", "Cap"),
    ("LEFT", "\u{2190}"),
    ("RIGHT", "\u{2192}"),
    ("UP", "\u{2191}"),
    ("DOWN", "\u{2193}"),
    ("HOME", "Hom"),
    ("END", "End"),
    ("PGUP", "PgU"),
    ("PGDOWN", "PgD"),
    ("LSHIFT", "LSf"),
    ("RSHIFT", "RSf"),
    ("LCTRL", "LCl"),
    ("RCTRL", "RCl"),
    ("LALT", "LAl"),
    ("RALT", "RAl"),
    ("LGUI", "LGi"),
    ("RGUI", "RGi"),
    ("GRAVE", "`"),
    ("MINUS", "-"),
    ("EQUAL", "="),
    ("LBRACKET", "["),
    ("RBRACKET", "]"),
    ("BSLASH", "\\"),
    ("SCOLON", ";"),
    ("QUOTE", "'"),
    ("COMMA", ","),
    ("DOT", "."),
    ("SLASH", "/"),
    ("MUTE", "Mut"),
    ("VOLU", "V+"),
    ("VOLD", "V-"),
    ("WH_U", "WU"),
    ("WH_D", "WD"),
    ("KP_0", "0"),
    ("KP_1", "1"),
    ("KP_2", "2"),
    ("KP_3", "3"),
    ("KP_4", "4"),
    ("KP_5", "5"),
    ("KP_6", "6"),
    ("KP_7", "7"),
    ("KP_8", "8"),
    ("KP_9", "9"),
    ("KP_DOT", "."),
    ("KP_PLUS", "+"),
    ("KP_MINUS", "-"),
    ("KP_ASTERISK", "*"),
    ("KP_SLASH", "/"),
    ("KP_EQUAL", "="),
    ("KP_ENTER", "Ent"),
    ("NO", ""),
    ("TRNS", "___"),
];

/// The eight unwrapped modifier keycodes.
const PURE_MODIFIERS: &[&str] = &[
    "KC_LSHIFT", "KC_RSHIFT", "KC_LCTRL", "KC_RCTRL", "KC_LALT", "KC_RALT", "KC_LGUI", "KC_RGUI",
];

fn pattern(re: &str) -> Regex {
    Regex::new(re).expect("hard-coded pattern is valid")
}

static MACRO_RE: LazyLock<Regex> = LazyLock::new(|| pattern(r"^M\d+$"));
static MOD_TAP_RE: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"^([LR])(CTL|SFT|ALT|GUI)_T\((.+)\)$"));
static LAYER_TAP_RE: LazyLock<Regex> = LazyLock::new(|| pattern(r"^LT(\d+)\((.+)\)$"));
static SHIFTED_RE: LazyLock<Regex> = LazyLock::new(|| pattern(r"^LSFT\(KC_(.+)\)$"));
static GUI_WRAP_RE: LazyLock<Regex> = LazyLock::new(|| pattern(r"^LGUI\((.+)\)$"));
static SHIFT_ALT_RE: LazyLock<Regex> = LazyLock::new(|| pattern(r"^LSA\(KC_(.+)\)$"));
static DEFAULT_LAYER_RE: LazyLock<Regex> = LazyLock::new(|| pattern(r"^DF\((\d+)\)$"));
static FUNCTION_KEY_RE: LazyLock<Regex> = LazyLock::new(|| pattern(r"^F\d+$"));

/// Decodes a token into display text and a semantic class.
///
/// Decoding never fails. Unrecognized or malformed tokens (for example a
/// wrapper with unbalanced parentheses) fall through to the plain-keycode
/// rule, which produces an abbreviation of at most three characters.
///
/// # Examples
///
/// ```
/// use vilview::decoder::{decode, SemanticClass};
///
/// let key = decode(&"LCTL_T(KC_A)".into());
/// assert_eq!(key.display, "A\nCtl");
/// assert_eq!(key.class, SemanticClass::ModTap);
///
/// let gap = decode(&(-1).into());
/// assert_eq!(gap.class, SemanticClass::Empty);
/// ```
#[must_use]
pub fn decode(token: &Keycode) -> DecodedKey {
    match token {
        // The -1 placeholder marks a position with no key at all.
        Keycode::Raw(-1) => DecodedKey {
            display: String::new(),
            class: SemanticClass::Empty,
            raw: "-1".to_string(),
        },
        Keycode::Code(code) if code == "-1" => DecodedKey {
            display: String::new(),
            class: SemanticClass::Empty,
            raw: code.clone(),
        },
        // Other integers are normalized to identifier form so the string
        // rules apply uniformly.
        Keycode::Raw(n) => decode_code(&format!("KC_{n}")),
        Keycode::Code(code) => decode_code(code),
    }
}

/// Ordered rule dispatch over the string token grammar.
fn decode_code(code: &str) -> DecodedKey {
    let raw = code.to_string();

    // Transparent: fall through to the layer below.
    if code == "KC_TRNS" {
        return DecodedKey {
            display: "___".to_string(),
            class: SemanticClass::Transparent,
            raw,
        };
    }

    // No-op key.
    if code == "KC_NO" {
        return DecodedKey {
            display: String::new(),
            class: SemanticClass::Empty,
            raw,
        };
    }

    // Macro references (M0, M1, ...) display as-is.
    if MACRO_RE.is_match(code) {
        return DecodedKey {
            display: raw.clone(),
            class: SemanticClass::Macro,
            raw,
        };
    }

    // Mod-tap: LCTL_T(KC_A) -> "A" over "Ctl". Must be checked before the
    // plain modifier wrappers, which share the same outer identifiers.
    if let Some(caps) = MOD_TAP_RE.captures(code) {
        let modifier = &caps[2];
        let mod_name = MOD_SHORT
            .iter()
            .find(|(m, _)| *m == modifier)
            .map_or_else(|| modifier.chars().take(3).collect(), |(_, s)| (*s).to_string());
        let base = base_display(&caps[3]);
        return DecodedKey {
            display: format!("{base}\n{mod_name}"),
            class: SemanticClass::ModTap,
            raw,
        };
    }

    // Layer-tap: LT1(KC_SPACE) -> "Spc" over "L1".
    if let Some(caps) = LAYER_TAP_RE.captures(code) {
        let base = base_display(&caps[2]);
        return DecodedKey {
            display: format!("{base}\nL{}", &caps[1]),
            class: SemanticClass::LayerTap,
            raw,
        };
    }

    // Shift combination: LSFT(KC_1) -> "!", LSFT(KC_A) -> "S-A".
    if let Some(caps) = SHIFTED_RE.captures(code) {
        let key = &caps[1];
        if let Some((_, symbol)) = SHIFTED_SYMBOLS.iter().find(|(k, _)| *k == key) {
            return DecodedKey {
                display: (*symbol).to_string(),
                class: SemanticClass::Alpha,
                raw,
            };
        }
        return DecodedKey {
            display: format!("S-{}", base_display(&format!("KC_{key}"))),
            class: SemanticClass::Alpha,
            raw,
        };
    }

    // GUI combination: LGUI(KC_SPACE) -> "G-Spc".
    if let Some(caps) = GUI_WRAP_RE.captures(code) {
        return DecodedKey {
            display: format!("G-{}", base_display(&caps[1])),
            class: SemanticClass::Special,
            raw,
        };
    }

    // Shift+Alt combination: LSA(KC_2) -> "SA-2". The inner fragment is
    // shown literally, not re-decoded.
    if let Some(caps) = SHIFT_ALT_RE.captures(code) {
        return DecodedKey {
            display: format!("SA-{}", &caps[1]),
            class: SemanticClass::Special,
            raw,
        };
    }

    // Default layer switch: DF(0) -> "DF0".
    if let Some(caps) = DEFAULT_LAYER_RE.captures(code) {
        return DecodedKey {
            display: format!("DF{}", &caps[1]),
            class: SemanticClass::Special,
            raw,
        };
    }

    // Lighting controls: RM_xxx shows the three characters after the prefix.
    if let Some(rest) = code.strip_prefix("RM_") {
        return DecodedKey {
            display: rest.chars().take(3).collect(),
            class: SemanticClass::Special,
            raw,
        };
    }

    // Caps word toggle.
    if code == "QK_CAPS_WORD_TOGGLE" {
        return DecodedKey {
            display: "CpW".to_string(),
            class: SemanticClass::Special,
            raw,
        };
    }

    // Unwrapped modifiers keep their side-distinguishing short names.
    if PURE_MODIFIERS.contains(&code) {
        return DecodedKey {
            display: base_display(code),
            class: SemanticClass::Modifier,
            raw,
        };
    }

    // Everything else is a plain keycode.
    DecodedKey {
        display: base_display(code),
        class: SemanticClass::Alpha,
        raw,
    }
}

/// Display name for a basic keycode.
///
/// Strips the `KC_` prefix, consults the name table, passes single
/// characters and function keys (`F1`..) through verbatim, and otherwise
/// truncates to the first three characters.
fn base_display(keycode: &str) -> String {
    let key = keycode.strip_prefix("KC_").unwrap_or(keycode);

    if let Some((_, name)) = KEY_NAMES.iter().find(|(k, _)| *k == key) {
        return (*name).to_string();
    }

    if key.chars().count() == 1 {
        return key.to_string();
    }

    if FUNCTION_KEY_RE.is_match(key) {
        return key.to_string();
    }

    key.chars().take(3).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_str(code: &str) -> DecodedKey {
        decode(&Keycode::Code(code.to_string()))
    }

    #[test]
    fn test_empty_sentinel_int() {
        let key = decode(&Keycode::Raw(-1));
        assert_eq!(key.display, "");
        assert_eq!(key.class, SemanticClass::Empty);
        assert_eq!(key.raw, "-1");
    }

    #[test]
    fn test_empty_sentinel_string() {
        let key = decode_str("-1");
        assert_eq!(key.display, "");
        assert_eq!(key.class, SemanticClass::Empty);
    }

    #[test]
    fn test_integer_token_normalized() {
        let key = decode(&Keycode::Raw(4));
        assert_eq!(key.display, "4");
        assert_eq!(key.class, SemanticClass::Alpha);
        assert_eq!(key.raw, "KC_4");
    }

    #[test]
    fn test_transparent() {
        let key = decode_str("KC_TRNS");
        assert_eq!(key.display, "___");
        assert_eq!(key.class, SemanticClass::Transparent);
    }

    #[test]
    fn test_no_key() {
        let key = decode_str("KC_NO");
        assert_eq!(key.display, "");
        assert_eq!(key.class, SemanticClass::Empty);
    }

    #[test]
    fn test_macro() {
        let key = decode_str("M3");
        assert_eq!(key.display, "M3");
        assert_eq!(key.class, SemanticClass::Macro);
    }

    #[test]
    fn test_macro_requires_digits() {
        // "Mx" is not a macro reference; it falls to the plain rule.
        let key = decode_str("Mx");
        assert_eq!(key.class, SemanticClass::Alpha);
        assert_eq!(key.display, "Mx");
    }

    #[test]
    fn test_mod_tap() {
        let key = decode_str("LCTL_T(KC_A)");
        assert_eq!(key.display, "A\nCtl");
        assert_eq!(key.class, SemanticClass::ModTap);
        assert_eq!(key.raw, "LCTL_T(KC_A)");
    }

    #[test]
    fn test_mod_tap_side_insensitive() {
        let left = decode_str("LCTL_T(KC_A)");
        let right = decode_str("RCTL_T(KC_A)");
        assert_eq!(left.display, right.display);

        let left = decode_str("LSFT_T(KC_ESCAPE)");
        let right = decode_str("RSFT_T(KC_ESCAPE)");
        assert_eq!(left.display, "Esc\nSft");
        assert_eq!(left.display, right.display);
    }

    #[test]
    fn test_mod_tap_named_inner() {
        let key = decode_str("LGUI_T(KC_SPACE)");
        assert_eq!(key.display, "Spc\nGui");
        assert_eq!(key.class, SemanticClass::ModTap);
    }

    #[test]
    fn test_mod_tap_beats_shift_wrapper() {
        // LSFT_T(..) is a mod-tap, not a shift combination.
        let key = decode_str("LSFT_T(KC_1)");
        assert_eq!(key.display, "1\nSft");
        assert_eq!(key.class, SemanticClass::ModTap);
    }

    #[test]
    fn test_layer_tap() {
        let key = decode_str("LT1(KC_SPACE)");
        assert_eq!(key.display, "Spc\nL1");
        assert_eq!(key.class, SemanticClass::LayerTap);
    }

    #[test]
    fn test_layer_tap_multi_digit() {
        let key = decode_str("LT12(KC_ENTER)");
        assert_eq!(key.display, "Ent\nL12");
        assert_eq!(key.class, SemanticClass::LayerTap);
    }

    #[test]
    fn test_shifted_digit() {
        let key = decode_str("LSFT(KC_1)");
        assert_eq!(key.display, "!");
        assert_eq!(key.class, SemanticClass::Alpha);
    }

    #[test]
    fn test_shifted_punctuation() {
        assert_eq!(decode_str("LSFT(KC_SCOLON)").display, ":");
        assert_eq!(decode_str("LSFT(KC_GRAVE)").display, "~");
        assert_eq!(decode_str("LSFT(KC_COMMA)").display, "<");
    }

    #[test]
    fn test_shifted_fallback() {
        // No shifted symbol known for letters: prefix with S-.
        let key = decode_str("LSFT(KC_A)");
        assert_eq!(key.display, "S-A");
        assert_eq!(key.class, SemanticClass::Alpha);
    }

    #[test]
    fn test_gui_combination() {
        let key = decode_str("LGUI(KC_SPACE)");
        assert_eq!(key.display, "G-Spc");
        assert_eq!(key.class, SemanticClass::Special);
    }

    #[test]
    fn test_shift_alt_raw_fragment() {
        // The LSA inner fragment is shown literally.
        let key = decode_str("LSA(KC_2)");
        assert_eq!(key.display, "SA-2");
        assert_eq!(key.class, SemanticClass::Special);

        let key = decode_str("LSA(KC_SPACE)");
        assert_eq!(key.display, "SA-SPACE");
    }

    #[test]
    fn test_default_layer() {
        let key = decode_str("DF(0)");
        assert_eq!(key.display, "DF0");
        assert_eq!(key.class, SemanticClass::Special);
    }

    #[test]
    fn test_lighting_controls() {
        let key = decode_str("RM_TOGG");
        assert_eq!(key.display, "TOG");
        assert_eq!(key.class, SemanticClass::Special);

        // Prefix shorter than three remaining characters still decodes.
        let key = decode_str("RM_ON");
        assert_eq!(key.display, "ON");
        assert_eq!(key.class, SemanticClass::Special);
    }

    #[test]
    fn test_caps_word_toggle() {
        let key = decode_str("QK_CAPS_WORD_TOGGLE");
        assert_eq!(key.display, "CpW");
        assert_eq!(key.class, SemanticClass::Special);
    }

    #[test]
    fn test_pure_modifiers() {
        let cases = [
            ("KC_LSHIFT", "LSf"),
            ("KC_RSHIFT", "RSf"),
            ("KC_LCTRL", "LCl"),
            ("KC_RCTRL", "RCl"),
            ("KC_LALT", "LAl"),
            ("KC_RALT", "RAl"),
            ("KC_LGUI", "LGi"),
            ("KC_RGUI", "RGi"),
        ];
        for (code, display) in cases {
            let key = decode_str(code);
            assert_eq!(key.display, display, "display for {code}");
            assert_eq!(key.class, SemanticClass::Modifier, "class for {code}");
        }
    }

    #[test]
    fn test_plain_named_keys() {
        assert_eq!(decode_str("KC_SPACE").display, "Spc");
        assert_eq!(decode_str("KC_BSPACE").display, "Bsp");
        assert_eq!(decode_str("KC_LEFT").display, "\u{2190}");
        assert_eq!(decode_str("KC_KP_7").display, "7");
        assert_eq!(decode_str("KC_KP_ASTERISK").display, "*");
        assert_eq!(decode_str("KC_QUOTE").display, "'");
    }

    #[test]
    fn test_plain_single_char() {
        let key = decode_str("KC_A");
        assert_eq!(key.display, "A");
        assert_eq!(key.class, SemanticClass::Alpha);
        assert_eq!(decode_str("KC_9").display, "9");
    }

    #[test]
    fn test_plain_function_keys() {
        assert_eq!(decode_str("KC_F1").display, "F1");
        assert_eq!(decode_str("KC_F12").display, "F12");
        assert_eq!(decode_str("KC_F12").class, SemanticClass::Alpha);
    }

    #[test]
    fn test_plain_truncates_unknown() {
        let key = decode_str("KC_PSCREEN");
        assert_eq!(key.display, "PSC");
        assert_eq!(key.class, SemanticClass::Alpha);
    }

    #[test]
    fn test_malformed_wrapper_falls_through() {
        // Unbalanced parentheses: no wrapper rule matches, the fallback
        // abbreviates the full original string.
        let key = decode_str("LCTL_T(KC_A");
        assert_eq!(key.display, "LCT");
        assert_eq!(key.class, SemanticClass::Alpha);

        let key = decode_str("LT1(");
        assert_eq!(key.display, "LT1");
        assert_eq!(key.class, SemanticClass::Alpha);
    }

    #[test]
    fn test_unknown_wrapper_falls_through() {
        let key = decode_str("MEH(KC_A)");
        assert_eq!(key.display, "MEH");
        assert_eq!(key.class, SemanticClass::Alpha);
    }

    #[test]
    fn test_shift_without_kc_prefix_falls_through() {
        // LSFT(1) lacks the KC_ prefix required by the shift rule.
        let key = decode_str("LSFT(1)");
        assert_eq!(key.display, "LSF");
        assert_eq!(key.class, SemanticClass::Alpha);
    }

    #[test]
    fn test_totality_over_printable_ascii() {
        // Every 1- and 2-character printable ASCII string decodes without
        // panicking, as do assorted longer adversarial inputs.
        let printable: Vec<char> = (b' '..=b'~').map(char::from).collect();
        for &a in &printable {
            let _ = decode_str(&a.to_string());
            for &b in &printable {
                let _ = decode_str(&format!("{a}{b}"));
            }
        }

        let adversarial = [
            "", "(", ")", "((((", "))))", "KC_", "KC_(", "LT(", "LT)(",
            "LCTL_T()", "LT1()", "LSFT()", "LGUI()", "LSA()", "DF()", "DF(x)",
            "RM_", "M", "M-1", "KC_TRNS ", " KC_TRNS",
        ];
        for code in adversarial {
            let _ = decode_str(code);
        }
    }

    #[test]
    fn test_determinism() {
        for code in ["KC_A", "LT1(KC_SPACE)", "LCTL_T(KC_A)", "garbage!!"] {
            let first = decode_str(code);
            let second = decode_str(code);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_classification_stable_across_calls() {
        let token = Keycode::Code("LT3(KC_TAB)".to_string());
        let class = decode(&token).class;
        for _ in 0..100 {
            assert_eq!(decode(&token).class, class);
        }
    }
}
