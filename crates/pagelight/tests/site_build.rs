//! Render-then-style pipeline test.
//!
//! Renders the page template the way the CLI does, then applies the
//! day/night styler to a document mirroring the rendered page's structural
//! contract (title class, surface and shadow ids).

use anyhow::Result;
use serde::Serialize;

use pagelight::{
    compile_str_with, Document, Element, Outcome, RenderOptions, Styler, SHADOW_ID, SURFACE_ID,
    TITLE_CLASS,
};

const SITE_TEMPLATE: &str = "\
<!DOCTYPE html>
<html>
  <body>
    <div id=\"name-box-opague\">
      <div id=\"name-box-shadow\"></div>
    </div>
{% for project in projects %}
    <h2 class=\"project-title\">{{ project }}</h2>
{% endfor %}
  </body>
</html>
";

#[derive(Serialize)]
struct SiteData {
    projects: Vec<String>,
}

#[test]
fn rendered_page_and_styler_share_the_structural_contract() -> Result<()> {
    let data = SiteData {
        projects: vec!["alpha".into(), "beta".into()],
    };
    let html = compile_str_with(SITE_TEMPLATE, &data, &RenderOptions::default())?;

    assert!(html.contains("<!DOCTYPE html>"));
    assert!(html.contains("<h2 class=\"project-title\">alpha</h2>"));
    assert!(html.contains(&format!("id=\"{}\"", SURFACE_ID)));
    assert!(html.contains(&format!("id=\"{}\"", SHADOW_ID)));

    // The document the styler sees mirrors what the template produced.
    let mut doc = Document::new()
        .with_element(Element::new().with_id(SURFACE_ID))
        .with_element(Element::new().with_id(SHADOW_ID))
        .with_element(Element::new().with_class(TITLE_CLASS))
        .with_element(Element::new().with_class(TITLE_CLASS));

    let styler = Styler::new().with_decor(true);
    assert_eq!(styler.apply_at_hour(21, &mut doc)?, Outcome::Darkened);

    for title in doc.elements().filter(|e| e.has_class(TITLE_CLASS)) {
        assert_eq!(title.style().get("color"), Some("#cfcfcf"));
    }
    assert_eq!(
        doc.by_id(SURFACE_ID).unwrap().style().get("background"),
        Some("#111111")
    );
    assert_eq!(
        doc.by_id(SHADOW_ID).unwrap().style().get("filter"),
        Some("brightness(0.07)")
    );
    assert_eq!(doc.body_style().get("background"), Some("#111111"));
    assert_eq!(doc.body_style().get("color"), Some("#cfcfcf"));
    Ok(())
}

#[test]
fn daytime_render_leaves_the_page_light() -> Result<()> {
    let mut doc = Document::new()
        .with_element(Element::new().with_id(SURFACE_ID))
        .with_element(Element::new().with_class(TITLE_CLASS));

    assert_eq!(Styler::new().apply_at_hour(10, &mut doc)?, Outcome::LeftLight);
    assert!(doc.body_style().is_empty());
    assert!(doc.elements().all(|e| e.style().is_empty()));
    Ok(())
}
