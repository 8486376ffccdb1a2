use maud::{html, Markup, PreEscaped, DOCTYPE};

const HTMX_SRC: &str = "https://unpkg.com/htmx.org@1.9.12";

const STYLES: &str = r#"
body{font-family:system-ui,sans-serif;background:#f9fafb;color:#111827;margin:0}
.container{max-width:56rem;margin:0 auto;padding:0 1rem 3rem}
header.page-header{max-width:56rem;margin:0 auto;padding:2rem 1rem}
header.page-header h1{font-size:1.9rem;margin:0}
header.page-header p{color:#4b5563;margin:.5rem 0 0}
.search-form{display:grid;gap:.75rem;background:#fff;border-radius:.5rem;padding:1rem;box-shadow:0 1px 3px rgba(0,0,0,.1);margin-bottom:1.5rem}
.search-form fieldset{border:none;padding:0;margin:0;display:flex;flex-wrap:wrap;gap:.75rem}
.grid{display:grid;grid-template-columns:repeat(auto-fill,minmax(20rem,1fr));gap:1rem}
.listing-card{background:#fff;border-radius:.5rem;padding:1rem;box-shadow:0 1px 3px rgba(0,0,0,.1)}
.listing-head{display:flex;justify-content:space-between;align-items:center}
.listing-head h2{font-size:1.1rem;margin:0}
.price{color:#16a34a;font-weight:700}
.location{color:#6b7280;font-size:.9rem;margin-top:.25rem}
.tags{display:flex;flex-wrap:wrap;gap:.5rem;margin-top:.75rem}
.tag{font-size:.75rem;background:#f3f4f6;padding:.2rem .5rem;border-radius:.25rem}
.scores{display:flex;gap:1rem;list-style:none;padding:0;font-size:.8rem;color:#374151}
.match{display:flex;align-items:center;gap:.5rem;margin-top:.75rem}
.match-badge{font-size:.8rem;font-weight:600;padding:.2rem .5rem;border-radius:999px;color:#fff}
.match-low{background:#dc2626}.match-medium{background:#f59e0b}.match-high{background:#16a34a}
.match-explain summary{cursor:pointer;list-style:none}
.match-explain .overlay{background:#111827;color:#f9fafb;padding:.75rem;border-radius:.5rem;font-size:.8rem}
.empty{color:#6b7280}
.htmx-indicator{display:none}.htmx-request .htmx-indicator,.htmx-request.htmx-indicator{display:block}
"#;

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(STYLES)) }
                script src=(HTMX_SRC) defer {};
            }
            body {
                header class="page-header" {
                    h1 { "Listings" }
                    p { "Find a place that fits your budget, neighbourhood and commute." }
                }
                (content)
            }
        }
    }
}
