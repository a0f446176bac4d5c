use minijinja::{AutoEscape, Environment, context};

use super::MapDocument;
use crate::Error;

static MAP_TMPL: &str = include_str!("./map.html.jinja");

/// Renders the Leaflet page. Text is HTML-escaped and every layer goes
/// through `tojson`, which escapes `<`, `>` and `&` inside the script.
pub(super) fn render_html(doc: &MapDocument) -> Result<String, Error> {
    let mut env = Environment::new();
    env.set_auto_escape_callback(|_| AutoEscape::Html);
    env.add_template("map", MAP_TMPL)
        .map_err(|e| Error::InvalidData(format!("Invalid map template: {e}")))?;

    let tmpl = env
        .get_template("map")
        .map_err(|e| Error::InvalidData(format!("Missing map template: {e}")))?;
    tmpl.render(context! {
        title => doc.title,
        css => doc.assets.css,
        js => doc.assets.js,
        center => [doc.center.y(), doc.center.x()],
        zoom => doc.zoom,
        tiles => doc.tiles,
        streets => doc.streets,
        nodes => doc.nodes,
        route => doc.route,
    })
    .map_err(|e| Error::InvalidData(format!("Failed to render map document: {e}")))
}
