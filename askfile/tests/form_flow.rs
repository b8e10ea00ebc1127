//! Scripted form sessions: inputs in, answers out, no user interaction.

use askfile::{EditOp, Form, FormInput, NavKey, Outcome, PromptSpec, parse_prompts};

fn type_str(form: &mut Form, s: &str) {
    for c in s.chars() {
        assert_eq!(
            form.handle_input(FormInput::Edit(EditOp::Insert(c))),
            Outcome::Continue
        );
    }
}

#[test]
fn fills_two_fields_and_submits() {
    let prompts = vec![PromptSpec::text("first name?"), PromptSpec::text("last name?")];
    let mut form = Form::new(prompts).unwrap();

    type_str(&mut form, "Ada");
    assert_eq!(form.handle_input(FormInput::Nav(NavKey::Next)), Outcome::Continue);
    type_str(&mut form, "Lovelace");

    assert_eq!(form.handle_input(FormInput::Nav(NavKey::Next)), Outcome::Continue);
    assert!(form.submit_focused());
    assert_eq!(form.handle_input(FormInput::Nav(NavKey::Confirm)), Outcome::Submit);

    let answers = form.into_answers();
    assert_eq!(answers.len(), 2);
    assert_eq!(answers[0].question, "first name?");
    assert_eq!(answers[0].value, "Ada");
    assert_eq!(answers[1].question, "last name?");
    assert_eq!(answers[1].value, "Lovelace");
}

#[test]
fn single_prompt_enter_twice_submits() {
    let mut form = Form::new([PromptSpec::text("name?")]).unwrap();
    type_str(&mut form, "Grace");

    assert_eq!(form.handle_input(FormInput::Nav(NavKey::Confirm)), Outcome::Continue);
    assert_eq!(form.handle_input(FormInput::Nav(NavKey::Confirm)), Outcome::Submit);

    let answers = form.into_answers();
    assert_eq!(answers[0].value, "Grace");
}

#[test]
fn corrections_survive_a_focus_round_trip() {
    let mut form = Form::new([PromptSpec::text("a?"), PromptSpec::text("b?")]).unwrap();

    type_str(&mut form, "wrng");
    form.handle_input(FormInput::Nav(NavKey::Next));
    type_str(&mut form, "ok");

    // Back to the first field to fix the typo.
    form.handle_input(FormInput::Nav(NavKey::Previous));
    form.handle_input(FormInput::Edit(EditOp::CursorLeft));
    form.handle_input(FormInput::Edit(EditOp::CursorLeft));
    form.handle_input(FormInput::Edit(EditOp::Insert('o')));

    form.handle_input(FormInput::Nav(NavKey::Next));
    form.handle_input(FormInput::Nav(NavKey::Next));
    assert_eq!(form.handle_input(FormInput::Nav(NavKey::Confirm)), Outcome::Submit);

    let answers = form.into_answers();
    assert_eq!(answers[0].value, "wrong");
    assert_eq!(answers[1].value, "ok");
}

#[test]
fn cancel_mid_session_leaves_values_readable() {
    let mut form = Form::new([PromptSpec::text("q?")]).unwrap();
    type_str(&mut form, "partial");

    assert_eq!(form.handle_input(FormInput::Cancel), Outcome::Cancel);
    assert_eq!(form.fields()[0].value(), "partial");
}

#[test]
fn parsed_prompt_file_drives_a_full_session() {
    let prompts = parse_prompts(
        r#"
        [[prompt]]
        question = "this is question number 1"
        type = "text"

        [[prompt]]
        question = "this is question number 2"
        type = "text"
        "#,
    )
    .unwrap();

    let mut form = Form::new(prompts).unwrap();
    type_str(&mut form, "one");
    form.handle_input(FormInput::Nav(NavKey::Next));
    type_str(&mut form, "two");
    form.handle_input(FormInput::Nav(NavKey::Next));
    assert_eq!(form.handle_input(FormInput::Nav(NavKey::Confirm)), Outcome::Submit);

    let answers = form.into_answers();
    assert_eq!(answers[0].question, "this is question number 1");
    assert_eq!(answers[0].value, "one");
    assert_eq!(answers[1].value, "two");
}
