use questionnaire::{
    CheckboxChoice, CheckboxOptions, EditorOptions, ExpandChoice, ExpandOptions, InputOptions,
    ListOptions, NumberOptions, PasswordOptions, Questionnaire, RawListOptions,
};
use questionnaire_requestty::RequesttyEngine;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut q = Questionnaire::new(RequesttyEngine::new());

    let username = q.ask(
        "What is your username?",
        InputOptions::default().with_validator(|s| {
            if s.trim().is_empty() {
                Err("Username is required".to_string())
            } else {
                Ok(())
            }
        }),
    )?;

    let age = q.ask_for_number(
        "How old are you?",
        NumberOptions::default().with_validator(|n| {
            if (0.0..=150.0).contains(n) {
                Ok(())
            } else {
                Err("Age must be between 0 and 150".to_string())
            }
        }),
    )?;

    let frameworks = ["Vue", "React", "Svelte"];
    let favorite = q.select_one_index("Favorite framework", &frameworks, ListOptions::default())?;
    let editor = q.ask_with_options(
        "Editor",
        &["vim", "emacs", "helix"],
        RawListOptions::default(),
    )?;

    let toppings = q.choose(
        "Pizza toppings",
        [
            CheckboxChoice::new("Cheese").checked(true),
            CheckboxChoice::new("Pineapple").with_value("pineapple"),
            CheckboxChoice::new("Olives"),
        ],
        CheckboxOptions::default(),
    )?;

    let conflict = q.ask_with_detailed_options(
        "config.toml already exists",
        vec![
            ExpandChoice::new('o', "Overwrite").with_value("overwrite"),
            ExpandChoice::new('s', "Skip").with_value("skip"),
        ],
        ExpandOptions::default().with_default('s'),
    )?;

    let _password = q.ask_for_password_hidden("Password:", PasswordOptions::default())?;
    let newsletter = q.true_or_false("Subscribe to the newsletter?", false, true)?;
    let bio = if q.yes_or_no("Write a bio?", false)? {
        q.editor("Bio:", EditorOptions::default().with_extension(".md"))?
    } else {
        String::new()
    };

    println!();
    println!("username:   {username}");
    println!("age:        {age}");
    println!("favorite:   {}", frameworks[favorite]);
    println!("editor:     {editor}");
    println!("toppings:   {}", toppings.join(", "));
    println!("conflict:   {conflict}");
    println!("newsletter: {newsletter}");
    println!("bio:        {} characters", bio.len());

    Ok(())
}
