//! Static site export.
//!
//! Renders the calculator page as a self-contained `index.html` wired to
//! the wasm bundle, ready for static-file hosting under the configured
//! path prefix. The markup uses the same element ids as the browser
//! bindings, so the exported page and the wasm side never disagree about
//! button names.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::SiteConfig;
use crate::core::Input;
use crate::wasm::{WasmKeypad, DISPLAY_ID};

/// Errors raised while writing the export.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The output directory could not be created.
    #[error("failed to create output directory {path}: {source}")]
    CreateDir {
        /// The directory that could not be created.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// A file could not be written.
    #[error("failed to write {path}: {source}")]
    Write {
        /// The file that could not be written.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Writes the static site into `out_dir` and returns the path of the
/// generated `index.html`.
pub fn write_site(config: &SiteConfig, out_dir: &Path) -> Result<PathBuf, ExportError> {
    std::fs::create_dir_all(out_dir).map_err(|source| ExportError::CreateDir {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let index = out_dir.join("index.html");
    std::fs::write(&index, render_index(config)).map_err(|source| ExportError::Write {
        path: index.clone(),
        source,
    })?;

    tracing::info!(path = %index.display(), base_path = %config.url_prefix(), "wrote static export");
    Ok(index)
}

/// Renders the page markup for the given configuration.
#[must_use]
pub fn render_index(config: &SiteConfig) -> String {
    let prefix = config.url_prefix();
    let mut html = String::with_capacity(4096);

    html.push_str(&format!(
        "<!DOCTYPE html>\n\
         <html lang=\"{lang}\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <meta name=\"description\" content=\"{description}\">\n\
         <title>{title}</title>\n\
         <style>\n{style}</style>\n\
         </head>\n\
         <body>\n\
         <main>\n\
         <h1>{title}</h1>\n\
         <div class=\"calculator\">\n\
         <div class=\"display\" id=\"{display_id}\">0</div>\n\
         <div class=\"keypad\">\n",
        lang = config.lang,
        description = config.description,
        title = config.title,
        style = STYLE,
        display_id = DISPLAY_ID,
    ));

    let keypad = WasmKeypad::new();
    for row in 0..keypad.row_count() {
        let buttons = keypad.row(row);
        let wide = buttons.len() == 1;
        for btn in buttons {
            let class = if wide { " class=\"wide\"" } else { "" };
            html.push_str(&format!(
                "<button id=\"{}\"{class}>{}</button>\n",
                btn.id, btn.label
            ));
        }
    }

    html.push_str(&format!(
        "</div>\n\
         </div>\n\
         </main>\n\
         <script type=\"module\">\n\
         import init, {{ BrowserCalculator }} from '{prefix}/pkg/calculadora.js';\n\
         await init();\n\
         const calc = new BrowserCalculator();\n\
         const display = document.getElementById('{display_id}');\n\
         for (const btn of document.querySelectorAll('.keypad button')) {{\n\
           btn.addEventListener('click', () => {{\n\
             const text = calc.handle_button(btn.id);\n\
             if (text !== undefined) display.textContent = text;\n\
           }});\n\
         }}\n\
         document.addEventListener('keydown', (e) => {{\n\
           const text = calc.handle_key(e.key);\n\
           if (text !== undefined) display.textContent = text;\n\
         }});\n\
         </script>\n\
         </body>\n\
         </html>\n",
        display_id = DISPLAY_ID,
    ));

    html
}

/// Embedded stylesheet: a dark four-column pad with a wide zero key.
const STYLE: &str = "\
body { margin: 0; font-family: system-ui, sans-serif; background: #1a1a2e; color: #eee; }
main { display: flex; flex-direction: column; align-items: center; padding-top: 2rem; }
.calculator { background: #16213e; border-radius: 12px; padding: 1rem; }
.display { min-width: 16rem; text-align: right; font-size: 2rem; padding: 0.5rem; background: #0f3460; border-radius: 8px; overflow-x: auto; }
.keypad { display: grid; grid-template-columns: repeat(4, 1fr); gap: 0.5rem; margin-top: 1rem; }
.keypad button { font-size: 1.25rem; padding: 0.75rem; border: none; border-radius: 8px; background: #533483; color: #eee; cursor: pointer; }
.keypad button:active { background: #e94560; }
.keypad button.wide { grid-column: 1 / -1; }
";
