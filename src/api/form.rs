//! HTML upload form.

use crate::models::{LAYOUT_PLACEHOLDER, Layout};

use super::request::{FILE_FIELD, LAYOUT_FIELD};

/// Standing reminder shown with every extraction.
pub const EXTRACTION_WARNING: &str = "Este sistema realiza extração automática de PDFs. \
Diferenças de layout podem gerar erros. Sempre confira os dados com o documento original.";

/// Renders the upload page: layout select, PDF input and the warning.
pub fn render_form() -> String {
    let layouts: String = Layout::ALL
        .iter()
        .map(|layout| {
            format!(
                "<option value=\"{}\">{}</option>",
                layout.slug(),
                layout.label()
            )
        })
        .collect();
    let options = format!("<option value=\"\">{LAYOUT_PLACEHOLDER}</option>{layouts}");

    format!(
        r#"<!DOCTYPE html>
<html lang="pt-BR">
<head>
<meta charset="utf-8">
<title>Extrator Previdenciário</title>
</head>
<body>
<h1>Extrator Previdenciário</h1>
<form method="post" action="/extract" enctype="multipart/form-data">
<p><label>Modelo do PDF <select name="{LAYOUT_FIELD}" required>{options}</select></label></p>
<p><label>Enviar PDF <input type="file" name="{FILE_FIELD}" accept="application/pdf,.pdf" required></label></p>
<p>
<button type="submit">Baixar Excel</button>
<button type="submit" formaction="/extract/preview">Visualizar tabelas</button>
</p>
</form>
<hr>
<p role="alert"><strong>Aviso:</strong> {EXTRACTION_WARNING}</p>
</body>
</html>
"#
    )
}
