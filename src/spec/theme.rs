//! Page templates the specification can be wrapped in.
//!
//! Both themes embed the document verbatim; they differ in page chrome and in
//! how long edge caches are told to keep the result.
use serde::Deserialize;

use super::render::Descriptor;

/// Page chrome variants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// The pre-2021 golang.org look.
    Classic,
    /// The go.dev site look.
    #[default]
    Godev,
}

impl Theme {
    /// `Cache-Control` value sent with pages in this theme unless overridden.
    #[must_use]
    pub const fn default_cache_control(self) -> &'static str {
        match self {
            Self::Classic => "s-maxage=3600",
            Self::Godev => "max-age=0, s-maxage=86400",
        }
    }

    /// Wrap `content` in a full HTML page, using `descriptor` for the headings.
    #[must_use]
    pub fn page(self, descriptor: &Descriptor, content: &str) -> String {
        match self {
            Self::Classic => classic(descriptor, content),
            Self::Godev => godev(descriptor, content),
        }
    }
}

/// Markup shared by both themes at the top of `<head>`.
const HEAD_META: &str = r##"<meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <meta name="theme-color" content="#00ADD8">"##;

/// Font stylesheets shared by both themes.
const HEAD_FONTS: &str = r#"<link href="https://fonts.googleapis.com/css?family=Work+Sans:600|Roboto:400,700" rel="stylesheet">
    <link href="https://fonts.googleapis.com/css?family=Product+Sans&text=Supported%20by%20Google&display=swap" rel="stylesheet">"#;

/// Copyright link and table of contents script, closing the page.
const FOOTER: &str = r#"<div style="margin-bottom: 24px">
    <a href="https://golang.org/doc/copyright">Copyright</a>
  </div>
  <script src="/src/toc.js"></script>
  </body>
</html>"#;

/// Page title suffix.
const SITE_NAME: &str = "Go Language Specification Previewer";

fn classic(descriptor: &Descriptor, content: &str) -> String {
    let Descriptor { title, subtitle } = descriptor;
    format!(
        r#"<!doctype html>
<html>
  <head>
    {HEAD_META}
    <title>{subtitle} - {SITE_NAME}</title>
    {HEAD_FONTS}
    <link type="text/css" rel="stylesheet" href="https://golang.org/lib/godoc/style.css">
  </head>
  <body>
  <main id="page" class="Site-content wide">
<div class="container">
  <h1>
    {title}
    <span class="text-muted"></span>
  </h1>
  <h2>
    {subtitle}
    <span class="text-muted"></span>
  </h2>
  <div id="nav"></div>
{content}
</div>
  </main>
  {FOOTER}"#
    )
}

fn godev(descriptor: &Descriptor, content: &str) -> String {
    let Descriptor { title, subtitle } = descriptor;
    format!(
        r#"<!doctype html>
<html>
  <head>
    {HEAD_META}
    <title>{subtitle} - {SITE_NAME}</title>
    {HEAD_FONTS}
    <link type="text/css" rel="stylesheet" href="https://go.dev/css/styles.css">
    <style type="text/css">
      .Site-header {{
        background: #485fc7;
        position: initial;
      }}
      .SiteContent--default {{
        margin-top: 0;
      }}
    </style>
  </head>
  <body class="Site">
    <header class="Site-header js-siteHeader">
    <div class="Header Header--dark">
      <nav class="Header-nav">
        <ul class="Header-menu">
          <li class="Header-menuItem ">
            <a href="/">{SITE_NAME} (unofficial)</a>
          </li>
        </ul>
      </nav>
    </div>
  </header>
  <main id="page" class="SiteContent SiteContent--default">
    <article class="Doc Article">
      <h1>
        {title}
        <span class="text-muted"></span>
      </h1>
      <h2 class="subtitle">
        {subtitle}
        <span class="text-muted"></span>
      </h2>
      <div id="nav" class="TOC"></div>
      {content}
    </article>
  </main>
  {FOOTER}"#
    )
}
