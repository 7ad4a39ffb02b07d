//! Server-side HTML rendering.
//!
//! Pages are plain strings built from escaped content. Each list is emitted
//! as carousel markup (root marker, viewport, track, items, controls, one
//! indicator per item) using the role markers from [`carousel::consts`], so
//! the wasm controller and the markup cannot drift apart. An empty list
//! renders its section with a notice and no carousel markup, which leaves the
//! controller inactive for that section.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use carousel::consts::{
    ACTIVE_CLASS, DOT_CLASS, ITEM_CLASS, NEXT_CLASS, PREV_CLASS, ROOT_ATTR, TRACK_CLASS, VIEWPORT_CLASS,
};

use crate::content::{ContentDocument, Feature, NewsArticle};

const SITE_NAME: &str = "Sekolah Islam Terpadu";

/// Module script that loads the wasm controller and runs its start entry.
const BOOT_SCRIPT: &str = r#"<script type="module">import init from "/pkg/carousel.js"; init();</script>"#;

/// Escape text for use in element content and quoted attribute values.
#[must_use]
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Anything that renders as one carousel item.
pub trait Card {
    fn render_card(&self) -> String;
}

impl Card for Feature {
    fn render_card(&self) -> String {
        format!(
            concat!(
                r#"<article class="feature-card border-t-4 {border}">"#,
                r#"<div class="feature-icon bg-gradient-to-br {from} {to}">{icon}</div>"#,
                "<h3>{title}</h3><p>{description}</p></article>",
            ),
            border = escape_html(&self.border_color),
            from = escape_html(&self.gradient_from),
            to = escape_html(&self.gradient_to),
            icon = escape_html(&self.icon),
            title = escape_html(&self.title),
            description = escape_html(&self.description),
        )
    }
}

impl Card for NewsArticle {
    fn render_card(&self) -> String {
        format!(
            concat!(
                r#"<article class="news-card">"#,
                r#"<div class="news-banner bg-gradient-to-br {from} {to}"><span class="news-category">{category}</span></div>"#,
                r#"<time datetime="{date}">{display_date}</time>"#,
                r#"<h3><a href="/berita/{slug}">{title}</a></h3><p>{excerpt}</p></article>"#,
            ),
            from = escape_html(&self.gradient_from),
            to = escape_html(&self.gradient_to),
            category = self.category.label(),
            date = escape_html(&self.published_at),
            display_date = escape_html(&self.display_date()),
            slug = escape_html(&self.slug),
            title = escape_html(&self.title),
            excerpt = escape_html(&self.excerpt),
        )
    }
}

/// One page section holding a carousel of `cards`, or `empty_notice` when
/// there is nothing to show.
#[must_use]
pub fn carousel_section<C: Card>(id: &str, heading: &str, cards: &[&C], empty_notice: &str) -> String {
    let mut html = format!(
        r#"<section id="{id}" class="section"><h2>{heading}</h2>"#,
        id = escape_html(id),
        heading = escape_html(heading),
    );
    if cards.is_empty() {
        html.push_str(&format!(r#"<p class="empty-notice">{}</p></section>"#, escape_html(empty_notice)));
        return html;
    }

    html.push_str(&format!(r#"<div class="carousel" {ROOT_ATTR}>"#));
    html.push_str(&format!(r#"<button type="button" class="{PREV_CLASS}" aria-label="Sebelumnya">&#8249;</button>"#));
    html.push_str(&format!(r#"<div class="{VIEWPORT_CLASS}"><div class="{TRACK_CLASS}">"#));
    for card in cards {
        html.push_str(&format!(r#"<div class="{ITEM_CLASS}">{}</div>"#, card.render_card()));
    }
    html.push_str("</div></div>");
    html.push_str(&format!(r#"<button type="button" class="{NEXT_CLASS}" aria-label="Berikutnya">&#8250;</button>"#));
    html.push_str(r#"<div class="carousel-dots">"#);
    for index in 0..cards.len() {
        let (class, current) = if index == 0 {
            (format!("{DOT_CLASS} {ACTIVE_CLASS}"), r#" aria-current="true""#)
        } else {
            (DOT_CLASS.to_owned(), "")
        };
        html.push_str(&format!(
            r#"<button type="button" class="{class}" aria-label="Slide {n}"{current}></button>"#,
            n = index + 1
        ));
    }
    html.push_str("</div></div></section>");
    html
}

/// Full document wrapper with the controller boot script.
#[must_use]
pub fn page_shell(title: &str, body: &str) -> String {
    format!(
        concat!(
            "<!DOCTYPE html>\n",
            r#"<html lang="id"><head><meta charset="utf-8">"#,
            r#"<meta name="viewport" content="width=device-width, initial-scale=1">"#,
            "<title>{title} | {site}</title></head>",
            r#"<body><header><a href="/">{site}</a> <a href="/berita">Berita</a></header>"#,
            "<main>{body}</main>{script}</body></html>",
        ),
        title = escape_html(title),
        site = SITE_NAME,
        body = body,
        script = BOOT_SCRIPT,
    )
}

#[must_use]
pub fn home_page(content: &ContentDocument) -> String {
    let features = carousel_section(
        "keunggulan",
        "Keunggulan Kami",
        &content.active_features(),
        "Belum ada keunggulan yang ditampilkan.",
    );
    let news = carousel_section("berita", "Berita Terbaru", &content.homepage_news(), "Belum ada berita terbaru.");
    page_shell("Beranda", &format!("{features}{news}"))
}

#[must_use]
pub fn article_page(article: &NewsArticle) -> String {
    let body = format!(
        concat!(
            r#"<article class="news-detail"><p class="news-category">{category}</p>"#,
            r#"<h1>{title}</h1><time datetime="{date}">{display_date}</time>"#,
            r#"<p>{excerpt}</p><a href="/berita">Kembali ke berita</a></article>"#,
        ),
        category = article.category.label(),
        title = escape_html(&article.title),
        date = escape_html(&article.published_at),
        display_date = escape_html(&article.display_date()),
        excerpt = escape_html(&article.excerpt),
    );
    page_shell(&article.title, &body)
}

#[must_use]
pub fn not_found_page() -> String {
    page_shell("Tidak ditemukan", r#"<p class="empty-notice">Halaman tidak ditemukan.</p>"#)
}

#[must_use]
pub fn news_page(content: &ContentDocument) -> String {
    let news = carousel_section("semua-berita", "Berita & Kegiatan", &content.published_news(), "Belum ada berita.");
    page_shell("Berita", &news)
}
