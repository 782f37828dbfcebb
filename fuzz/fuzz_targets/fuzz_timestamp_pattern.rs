#![no_main]
use libfuzzer_sys::fuzz_target;
use logpipe::{TimestampRule, Timezone};

fuzz_target!(|data: &str| {
    let now = chrono::Utc::now();
    for zone in [Timezone::Local, Timezone::Utc] {
        let rule = TimestampRule::new(data).timezone(zone);
        let rendered = rule.render(now);

        // Validation and rendering must agree in both directions
        if rule.validate().is_ok() {
            let formatted = rule.try_render(now).expect("validated pattern failed to format");
            assert_eq!(formatted, rendered);
        } else {
            assert!(rendered.is_empty());
        }
    }

    // Timezone parsing must not panic either
    let _ = data.parse::<Timezone>();
});
