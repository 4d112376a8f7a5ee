#[cfg(test)]
mod tests {
    use super::super::parser::parse_script;
    use super::super::runner::ScriptRunner;
    use crate::config::WidgetConfig;
    use crate::widget::Unit;

    fn replay(script: &str) -> (ScriptRunner, Vec<super::super::runner::Frame>) {
        let events = parse_script(script).unwrap();
        let mut runner = ScriptRunner::new(WidgetConfig::default());
        let frames = runner.run(&events);
        (runner, frames)
    }

    #[test]
    fn test_end_to_end_script() {
        let (runner, frames) = replay(
            r#"
render
unit px
commit 500
unit percent
"#,
        );

        assert_eq!(frames.len(), 4);
        assert_eq!(frames[0].render.display_text, "100");
        assert!(frames[0].render.increase_disabled);

        assert_eq!(frames[2].value, 500.0);
        assert!(!frames[2].render.decrease_disabled);
        assert!(!frames[2].render.increase_disabled);

        assert_eq!(frames[3].value, 100.0);
        assert_eq!(frames[3].unit, Unit::Percent);
        assert!(frames[3].render.increase_disabled);
        assert_eq!(runner.surface().text, "100");
    }

    #[test]
    fn test_typed_text_stays_uncommitted() {
        let (runner, frames) = replay("type 12,3\n");
        assert_eq!(frames[0].field_text, "12.3");
        assert_eq!(frames[0].value, 100.0);
        assert_eq!(frames[0].render.display_text, "100");
        assert_eq!(runner.controller().last_valid_percent(), 100.0);
    }

    #[test]
    fn test_commit_uses_field_text() {
        let (_, frames) = replay("type 12a3\ncommit\n");
        assert_eq!(frames[1].value, 12.0);
        assert_eq!(frames[1].field_text, "12");
    }

    #[test]
    fn test_step_reads_live_field_text() {
        let (runner, frames) = replay("type 40\nstep increase\n");
        assert_eq!(frames[1].value, 40.1);
        assert_eq!(frames[1].field_text, "40.1");
        // Steps never move the baseline
        assert_eq!(runner.controller().last_valid_percent(), 100.0);
    }

    #[test]
    fn test_revert_in_script() {
        let (_, frames) = replay("commit 80\ncommit 150\n");
        assert_eq!(frames[1].value, 80.0);
        assert_eq!(frames[1].field_text, "80");
    }

    #[test]
    fn test_frames_serialize() {
        let (_, frames) = replay("unit px\nstep -\n");
        let json = serde_json::to_value(&frames).unwrap();
        assert_eq!(json[0]["event"]["kind"], "unit");
        assert_eq!(json[0]["event"]["arg"], "px");
        assert_eq!(json[1]["event"]["arg"], "decrease");
        assert_eq!(json[1]["value"], 99.9);
        assert_eq!(json[1]["render"]["displayText"], "99.9");
        assert_eq!(json[1]["render"]["tooltipVisible"], false);
    }

    #[test]
    fn test_demo_scenario() {
        let (runner, frames) = replay(include_str!("../../../demos/scenario.events"));
        assert_eq!(frames.len(), 10);

        // "commit" after typing 500 in pixel mode
        assert_eq!(frames[3].value, 500.0);
        // back to percent restores the last valid percent
        assert_eq!(frames[4].value, 100.0);
        // 150 percent is rejected in favour of 80
        assert_eq!(frames[6].value, 80.0);
        // step reads the typed, uncommitted "12.3"
        assert_eq!(frames[8].value, 12.4);

        assert_eq!(runner.controller().value(), 12.4);
        assert_eq!(runner.controller().last_valid_percent(), 12.4);
    }
}
