//! Integration tests for questionnaire

use questionnaire::{
    CheckboxChoice, CheckboxOptions, EditorOptions, ExpandChoice, ExpandOptions, InputOptions,
    ListOptions, NameGenerator, NumberOptions, PasswordOptions, QuestionKind, Questionnaire,
    QuestionnaireError, RawListOptions, ScriptedEngine, ScriptedEngineError,
};

fn questionnaire(engine: ScriptedEngine) -> Questionnaire<ScriptedEngine> {
    Questionnaire::new(engine)
}

#[test]
fn test_ask_returns_text_verbatim() {
    let mut q = questionnaire(ScriptedEngine::new().with_text("  Alice Smith "));
    let name = q.ask("What is your username?", InputOptions::default()).unwrap();

    assert_eq!(name, "  Alice Smith ");
    let asked = &q.engine().asked()[0];
    assert_eq!(asked.message(), "What is your username?");
    assert_eq!(asked.kind().type_tag(), "input");
}

#[test]
fn test_ask_with_validator_reprompts() {
    let mut q = questionnaire(ScriptedEngine::new().with_text("").with_text("bob"));
    let name = q
        .ask(
            "Username:",
            InputOptions::default().with_validator(|s| {
                if s.is_empty() {
                    Err("Username is required".to_string())
                } else {
                    Ok(())
                }
            }),
        )
        .unwrap();

    assert_eq!(name, "bob");
    assert_eq!(q.engine().rejections(), ["Username is required"]);
}

#[test]
fn test_yes_or_no() {
    let mut q = questionnaire(ScriptedEngine::new().with_confirm(true).with_default());

    assert!(q.yes_or_no("Are you hungry yet?", false).unwrap());
    assert!(!q.yes_or_no("Still hungry?", false).unwrap());

    match q.engine().asked()[1].kind() {
        QuestionKind::Confirm(confirm) => assert!(!confirm.default),
        other => panic!("Expected Confirm question kind, got {}", other.type_tag()),
    }
}

#[test]
fn test_true_or_false() {
    let mut q = questionnaire(
        ScriptedEngine::new()
            .with_text("")
            .with_text("YES")
            .with_text("yes")
            .with_text("T")
            .with_text("maybe"),
    );

    assert!(!q.true_or_false("Continue?", false, true).unwrap());
    assert!(q.true_or_false("Continue?", false, true).unwrap());
    assert!(!q.true_or_false("Continue?", false, false).unwrap());
    assert!(q.true_or_false("Continue?", false, true).unwrap());
    assert!(!q.true_or_false("Continue?", true, true).unwrap());

    assert_eq!(q.engine().asked()[0].message(), "Continue? (true/false)");
}

#[test]
fn test_index_wrappers_return_position() {
    let frameworks = ["Vue", "React", "Svelte", "Angular"];

    for i in 0..frameworks.len() {
        let mut q = questionnaire(ScriptedEngine::new().with_selection(i).with_selection(i));

        let raw = q
            .ask_with_options_and_return_index(
                "Favorite framework",
                &frameworks,
                RawListOptions::default(),
            )
            .unwrap();
        let menu = q
            .select_one_index("Favorite framework", &frameworks, ListOptions::default())
            .unwrap();

        assert_eq!(raw, i);
        assert_eq!(menu, i);
    }
}

#[test]
fn test_index_wrapper_with_rewritten_label() {
    let mut q = questionnaire(ScriptedEngine::new().with_selection(0));
    let result = q.select_one_index(
        "Favorite framework",
        &["Vue", "React"],
        ListOptions::default().with_filter(|s| s.to_lowercase()),
    );

    assert!(matches!(
        result,
        Err(QuestionnaireError::UnknownChoice { answer }) if answer == "vue"
    ));
}

#[test]
fn test_select_one_with_default_and_filter() {
    let mut q = questionnaire(ScriptedEngine::new().with_default());
    let picked = q
        .select_one(
            "Favorite framework",
            &["Vue", "React"],
            ListOptions::default()
                .with_default("React")
                .with_loop(false)
                .with_filter(|s| s.to_uppercase()),
        )
        .unwrap();

    assert_eq!(picked, "REACT");
    match q.engine().asked()[0].kind() {
        QuestionKind::List(list) => {
            assert_eq!(list.default_index(), Some(1));
            assert!(!list.should_loop);
        }
        other => panic!("Expected List question kind, got {}", other.type_tag()),
    }
}

#[test]
fn test_ask_with_options_default_index() {
    let mut q = questionnaire(ScriptedEngine::new().with_default());
    let picked = q
        .ask_with_options("Enable CORS?", &["yes", "no"], RawListOptions::default().with_default(1))
        .unwrap();

    assert_eq!(picked, "no");
}

#[test]
fn test_ask_with_options_ignores_out_of_range_default() {
    let mut q = questionnaire(ScriptedEngine::new().with_default().with_default());

    let raw = q
        .ask_with_options("Pick", &["a", "b"], RawListOptions::default().with_default(5))
        .unwrap();
    let menu = q
        .select_one("Pick", &["a", "b"], ListOptions::default().with_default("zzz"))
        .unwrap();

    assert_eq!(raw, "a");
    assert_eq!(menu, "a");
    match q.engine().asked()[0].kind() {
        QuestionKind::RawList(list) => assert_eq!(list.default_index(), None),
        other => panic!("Expected RawList question kind, got {}", other.type_tag()),
    }
}

#[test]
fn test_ask_with_detailed_options() {
    let choices = vec![
        ExpandChoice::new('o', "Overwrite").with_value("overwrite"),
        ExpandChoice::new('s', "Skip").with_value("skip"),
    ];

    let mut q = questionnaire(ScriptedEngine::new().with_key('s').with_default());
    let first = q
        .ask_with_detailed_options("File exists", choices.clone(), ExpandOptions::default())
        .unwrap();
    let second = q
        .ask_with_detailed_options(
            "File exists",
            choices,
            ExpandOptions::default().with_default('o'),
        )
        .unwrap();

    assert_eq!(first, "skip");
    assert_eq!(second, "overwrite");
}

#[test]
fn test_choose_plain_labels() {
    let mut q = questionnaire(ScriptedEngine::new().with_selections([1, 0]));
    let picked = q.choose("Pick", ["a", "b"], CheckboxOptions::default()).unwrap();

    assert_eq!(picked, vec!["b", "a"]);
    match q.engine().asked()[0].kind() {
        QuestionKind::Checkbox(checkbox) => {
            assert_eq!(
                checkbox.choices,
                vec![CheckboxChoice::new("a"), CheckboxChoice::new("b")]
            );
        }
        other => panic!("Expected Checkbox question kind, got {}", other.type_tag()),
    }
}

#[test]
fn test_choose_detailed_choices() {
    let mut q = questionnaire(ScriptedEngine::new().with_selections([0, 1]));
    let picked = q
        .choose(
            "Toppings",
            [
                CheckboxChoice::new("Extra cheese").with_value("cheese"),
                CheckboxChoice::new("Olives"),
            ],
            CheckboxOptions::default(),
        )
        .unwrap();

    assert_eq!(picked, vec!["cheese", "Olives"]);
}

#[test]
fn test_checkbox_validator_and_defaults() {
    let mut q = questionnaire(ScriptedEngine::new().with_selections([]).with_default());
    let picked = q
        .checkbox(
            "Toppings",
            vec![CheckboxChoice::new("ham"), CheckboxChoice::new("pineapple")],
            CheckboxOptions::default()
                .with_default(["pineapple"])
                .with_validator(|items| {
                    if items.is_empty() {
                        Err("Pick at least one".to_string())
                    } else {
                        Ok(())
                    }
                }),
        )
        .unwrap();

    assert_eq!(picked, vec!["pineapple"]);
    assert_eq!(q.engine().rejections(), ["Pick at least one"]);
}

#[test]
fn test_ask_for_number_rejects_non_numbers() {
    let mut q = questionnaire(
        ScriptedEngine::new()
            .with_text("abc")
            .with_text("")
            .with_text("12x")
            .with_text("-3.5"),
    );

    let n = q.ask_for_number("Temperature?", NumberOptions::default()).unwrap();

    assert_eq!(n, -3.5);
    assert_eq!(q.engine().rejections(), ["A valid number is expected!"; 3]);
}

#[test]
fn test_ask_for_number_caller_validator_runs_after_guard() {
    let mut q = questionnaire(
        ScriptedEngine::new()
            .with_text("abc")
            .with_text("200")
            .with_text("42"),
    );

    let age = q
        .ask_for_number(
            "How old are you?",
            NumberOptions::default().with_validator(|n| {
                if *n <= 150.0 {
                    Ok(())
                } else {
                    Err("Nobody is that old".to_string())
                }
            }),
        )
        .unwrap();

    assert_eq!(age, 42.0);
    assert_eq!(
        q.engine().rejections(),
        ["A valid number is expected!", "Nobody is that old"]
    );
}

#[test]
fn test_ask_for_number_default() {
    let mut q = questionnaire(ScriptedEngine::new().with_text(""));
    let port = q
        .ask_for_number("Port:", NumberOptions::default().with_default(8080.0))
        .unwrap();

    assert_eq!(port, 8080.0);
}

#[test]
fn test_password_masks() {
    let mut q = questionnaire(
        ScriptedEngine::new()
            .with_text("hunter2")
            .with_text("hunter2")
            .with_text("hunter2"),
    );

    q.ask_for_password("Password:", PasswordOptions::default(), false)
        .unwrap();
    q.ask_for_password_hidden("Password:", PasswordOptions::default())
        .unwrap();
    let secret = q
        .ask_for_password("Password:", PasswordOptions::default().with_mask('#'), true)
        .unwrap();

    assert_eq!(secret, "hunter2");

    let masks: Vec<Option<char>> = q
        .engine()
        .asked()
        .iter()
        .map(|question| match question.kind() {
            QuestionKind::Password(password) => password.mask,
            other => panic!("Expected Password question kind, got {}", other.type_tag()),
        })
        .collect();
    assert_eq!(masks, vec![None, Some('*'), Some('#')]);
}

#[test]
fn test_editor() {
    let mut q = questionnaire(ScriptedEngine::new().with_default().with_text("Rustacean."));

    let first = q
        .editor("Bio:", EditorOptions::default().with_default("Hello!"))
        .unwrap();
    let second = q
        .editor("Bio:", EditorOptions::default().with_extension(".md"))
        .unwrap();

    assert_eq!(first, "Hello!");
    assert_eq!(second, "Rustacean.");
    match q.engine().asked()[1].kind() {
        QuestionKind::Editor(editor) => assert_eq!(editor.extension.as_deref(), Some(".md")),
        other => panic!("Expected Editor question kind, got {}", other.type_tag()),
    }
}

#[test]
fn test_every_call_uses_a_fresh_name() {
    let mut engine = ScriptedEngine::new();
    for _ in 0..500 {
        engine = engine.with_confirm(true);
    }

    let mut q = questionnaire(engine);
    for _ in 0..500 {
        q.yes_or_no("Again?", true).unwrap();
    }

    let asked = q.engine().asked();
    for pair in asked.windows(2) {
        assert_ne!(pair[0].name(), pair[1].name());
    }
}

#[test]
fn test_custom_name_prefix() {
    let mut q = Questionnaire::with_names(
        ScriptedEngine::new().with_confirm(true),
        NameGenerator::with_prefix("setup_"),
    );
    q.yes_or_no("Ready?", false).unwrap();

    assert!(q.engine().asked()[0].name().as_str().starts_with("setup_1_"));
}

#[test]
fn test_engine_errors_propagate() {
    let mut q = questionnaire(ScriptedEngine::new());
    let err = q.ask("Anyone there?", InputOptions::default()).unwrap_err();

    assert!(matches!(
        err.engine_error::<ScriptedEngineError>(),
        Some(ScriptedEngineError::Exhausted(_))
    ));
}

#[test]
fn test_borrowed_engine() {
    let mut engine = ScriptedEngine::new().with_text("borrowed");
    {
        let mut q = Questionnaire::new(&mut engine);
        assert_eq!(q.ask("Who?", InputOptions::default()).unwrap(), "borrowed");
    }
    assert_eq!(engine.asked().len(), 1);
}
