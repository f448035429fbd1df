//! Quiz and loading-screen commands

use std::io::BufRead;

use crate::{
    dex::{get_loading_pokemon_image, get_pokemon_random_image, random_pokemon_id, MAX_POKEMON_ID},
    models::QuizHint,
    Result,
};

use super::CommandContext;

/// Handle `pokedex quiz`
///
/// In text mode one guess is read from `input` and checked against the
/// answer. In JSON mode the round is printed and nothing is read.
pub async fn handle_quiz<R: BufRead>(
    ctx: &CommandContext,
    id: Option<u32>,
    input: &mut R,
) -> Result<()> {
    let id = id.unwrap_or_else(|| random_pokemon_id(&mut rand::rng(), MAX_POKEMON_ID));
    let hint = get_pokemon_random_image(&ctx.client, id, &ctx.language).await?;

    if ctx.as_json {
        return ctx.emit(&hint, render_question);
    }

    println!("{}", render_question(&hint)); // tarpaulin::skip
    let mut guess = String::new();
    input.read_line(&mut guess)?;
    println!("{}", render_verdict(&hint, &guess)); // tarpaulin::skip

    Ok(())
}

/// Handle `pokedex loading`
pub async fn handle_loading(ctx: &CommandContext) -> Result<()> {
    let image = get_loading_pokemon_image(&ctx.client).await?;
    ctx.emit(&image, |image| image.clone())
}

pub fn render_question(hint: &QuizHint) -> String {
    format!(
        "Who's that pokemon?\n  {}\n  Hint: {}\n> ",
        hint.pokemon_random_image, hint.pokemon_hint
    )
}

pub fn render_verdict(hint: &QuizHint, guess: &str) -> String {
    if hint.is_correct(guess) {
        format!("Correct! It's {}.", hint.pokemon_name)
    } else {
        format!("Wrong. It was {}.", hint.pokemon_name)
    }
}
