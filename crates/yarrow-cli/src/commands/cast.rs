use yarrow_core::{Language, Method, Mode};
use yarrow_interpret::LlmConfig;
use yarrow_session::NewSession;

use miette::IntoDiagnostic;
use tracing::debug;

pub async fn run(
    method: Method,
    question: &str,
    seed: Option<String>,
    lang: Language,
    json: bool,
    llm: LlmConfig,
) -> miette::Result<()> {
    let engine = super::build_engine(lang, &llm)?;

    let mut request = NewSession::new(question, Mode::Ai, method).with_language(lang);
    if let Some(seed) = seed {
        request = request.with_seed(seed);
    }

    let session = engine.create(request).await.into_diagnostic()?;
    debug!(session = %session.id, seed = %session.seed, "casting");
    let session = engine.generate(&session.id).await.into_diagnostic()?;
    super::print_session(&session, json)
}
