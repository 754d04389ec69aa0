use std::io;

use carrystation::i18n::Language;
use carrystation_app::{context::AppContext, stylist::StylistChat};
use clap::Args;

use super::output_error;

#[derive(Debug, Args)]
pub(crate) struct StylistArgs {
    /// Outfit or occasion to style, e.g. "Red evening dress"
    #[arg(required = true, trailing_var_arg = true)]
    query: Vec<String>,
}

pub(crate) async fn run(
    context: &AppContext,
    language: Language,
    args: &StylistArgs,
    out: &mut impl io::Write,
) -> Result<(), String> {
    let text = context.translations.get(language);
    let chat = StylistChat::with_greeting(context.stylist.clone(), &text.ai.greeting);

    let Some(reply) = chat.ask(&args.query.join(" "), language).await else {
        return Err(text.ai.placeholder.to_string());
    };

    writeln!(out, "{}", text.ai.title).map_err(output_error)?;
    writeln!(out, "{}", reply.text).map_err(output_error)
}
