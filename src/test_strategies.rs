use proptest::prelude::*;

use crate::dice::DiceSpec;

pub(crate) fn dice_spec_strategy() -> impl Strategy<Value = DiceSpec> {
    (1u32..=100, 2u32..=1000, -1000i32..=1000)
        .prop_map(|(count, sides, modifier)| DiceSpec::new(count, sides, modifier).unwrap())
}

pub(crate) fn notation_strategy() -> impl Strategy<Value = (String, DiceSpec)> {
    (
        prop::option::of(1u32..=100),
        2u32..=1000,
        prop::option::of(-1000i32..=1000),
        prop_oneof![Just("d"), Just("D")],
    )
        .prop_map(|(count, sides, modifier, separator)| {
            let mut text = String::new();
            if let Some(count) = count {
                text.push_str(&count.to_string());
            }
            text.push_str(separator);
            text.push_str(&sides.to_string());
            if let Some(modifier) = modifier {
                text.push_str(&format!("{:+}", modifier));
            }
            let spec = DiceSpec::new(count.unwrap_or(1), sides, modifier.unwrap_or(0)).unwrap();
            (text, spec)
        })
}
