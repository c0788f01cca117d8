//! Self-contained export document.

use crate::model::Document;

use super::markup::render_markup;

/// Suggested file name for the downloaded export.
pub const EXPORT_FILE_NAME: &str = "generated-ui.html";

/// Style sheet embedded in exported documents.
pub const EXPORT_CSS: &str = "\
  body{font-family:Inter,system-ui,-apple-system,'Segoe UI',Roboto,Arial,sans-serif;margin:20px;background:#f8fafc;color:#0f172a}
  .hero{padding:28px;border-radius:12px;background:linear-gradient(90deg,#dbeafe,#f0f9ff);text-align:center;margin:10px 0}
  .hero h2{margin:0 0 8px}
  .card{border-radius:10px;padding:14px;background:#fff;border:1px solid #e6eef6;margin:10px 0}
  .card-title{font-weight:700;margin:0 0 6px}
  .button{background:#2563eb;color:#fff;padding:10px 14px;border-radius:8px;border:none;cursor:pointer}
  .grid{display:grid;grid-template-columns:repeat(auto-fill,minmax(180px,1fr));gap:12px}
  .two-column{display:grid;grid-template-columns:1fr 1fr;gap:12px}
  .navbar{display:flex;justify-content:space-between;align-items:center;padding:12px 16px;background:#0f172a;color:#fff;border-radius:10px}
  .navbar-brand{font-weight:700}
  .navbar-links a{color:#fff;margin-left:12px;text-decoration:none}
  .footer{text-align:center;color:#64748b;padding:16px 0}
  .form-field{margin-bottom:8px}
  .form-field label{display:block;margin-bottom:4px}
  input{padding:8px;border-radius:6px;border:1px solid #dbeafe;width:100%;box-sizing:border-box}
  .pricing h2{text-align:center}
  .pricing-tier{text-align:center}
  .price{font-size:1.5rem;font-weight:700}
  .testimonial blockquote{margin:0 0 8px;font-style:italic}
  .faq-item h4{margin:8px 0 4px}
";

/// Full HTML document wrapping the markup output.
pub fn export_document(doc: &Document) -> String {
    let body = render_markup(doc)
        .lines()
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("    {}", line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "<!doctype html>
<html>
<head>
<meta charset=\"utf-8\" />
<meta name=\"viewport\" content=\"width=device-width,initial-scale=1\" />
<title>Exported UI</title>
<style>
{css}</style>
</head>
<body>
  <div id=\"root\">
{body}
  </div>
</body>
</html>
",
        css = EXPORT_CSS,
        body = body
    )
}
