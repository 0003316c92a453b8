use super::{bold, nav};

/// Fallback view for errors that escaped every call site.
pub fn render_error_page(message: &str) -> String {
    format!(
        "{}\nUm erro aconteceu na aplicação, abaixo você pode ver mais detalhes:\n\n{}\n\nVoltar para o Dashboard ({})",
        bold("Whoops, algo inesperado aconteceu..."),
        message,
        nav::DASHBOARD,
    )
}
