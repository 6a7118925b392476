use maud::{html, Markup};

use crate::config::SiteConfig;
use crate::models::{Entry, EntryForm, EntryKind};
use crate::views::layout::{page, Seo};

fn admin_seo(config: &SiteConfig, title: &str, path: &str) -> Seo {
    Seo::website(
        format!("{title} | {}", config.site_name),
        "Content administration.",
        path,
    )
}

pub fn create_login_page(config: &SiteConfig, error: Option<&str>) -> Markup {
    page(
        config,
        &admin_seo(config, "System Access", "/admin"),
        html! {
            div class="card" {
                h2 { "System Access" }
                p class="meta" { "Enter your secure key to proceed." }
                form method="post" action="/admin" {
                    input type="password" name="password" placeholder="Enter Access Key..." autofocus;
                    @if let Some(error) = error {
                        p class="error" { (error) }
                    }
                    p { button type="submit" { "Authenticate" } }
                }
            }
        },
    )
}

pub fn create_dashboard_page(config: &SiteConfig, entries: &[Entry]) -> Markup {
    page(
        config,
        &admin_seo(config, "Dashboard", "/admin/dashboard"),
        html! {
            h1 { "Content Command Center" }
            p class="meta" { "Manage your digital footprint." }
            p {
                a class="pill" href="/admin/new" { "+ New Entry" }
                form method="post" action="/admin/logout" style="display: inline;" {
                    button type="submit" { "Logout" }
                }
            }
            @if entries.is_empty() {
                div class="card" { "No content entities found. Initialize new data." }
            } @else {
                table {
                    thead {
                        tr {
                            th { "Title" }
                            th { "Type" }
                            th { "Status" }
                            th { "Date" }
                            th { "Actions" }
                        }
                    }
                    tbody {
                        @for entry in entries {
                            tr {
                                td { (entry.title) }
                                td { span class="badge" { (entry.kind) } }
                                td { (if entry.published { "Published" } else { "Draft" }) }
                                td class="meta" { (entry.created_at.format("%Y-%m-%d")) }
                                td {
                                    a href=(format!("/admin/edit/{}", urlencoding::encode(&entry.id))) { "Edit" }
                                    " "
                                    form method="post"
                                        action=(format!("/admin/delete/{}", urlencoding::encode(&entry.id)))
                                        style="display: inline;"
                                        onsubmit="return confirm('Are you sure you want to delete this entity?');" {
                                        button type="submit" { "Delete" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn create_editor_page(
    config: &SiteConfig,
    form: &EntryForm,
    is_new: bool,
    error: Option<&str>,
) -> Markup {
    let (heading, path) = if is_new {
        ("Create Entity", "/admin/new".to_string())
    } else {
        (
            "Edit Entity",
            format!("/admin/edit/{}", urlencoding::encode(&form.id)),
        )
    };

    page(
        config,
        &admin_seo(config, heading, &path),
        html! {
            p { a href="/admin/dashboard" { "← Dashboard" } }
            h1 { (heading) }
            @if let Some(error) = error {
                p class="error" { (error) }
            }
            form method="post" action="/admin/save" {
                input type="hidden" name="id" value=(form.id);

                label for="title" { "Title" }
                input id="title" name="title" value=(form.title) placeholder="Enter title..." required;

                label for="slug" { "Slug" }
                input id="slug" name="slug" value=(form.slug)
                    placeholder=(if is_new { "left blank, derived from the title" } else { "url-slug" });

                label for="content" { "Content (Markdown)" }
                textarea id="content" class="content" name="content" placeholder="# Write your masterpiece..." required {
                    (form.content)
                }

                label for="type" { "Type" }
                select id="type" name="type" {
                    @for (kind, label) in [(EntryKind::Blog, "Blog Post"), (EntryKind::Research, "Research Paper")] {
                        option value=(kind.as_str()) selected[form.kind == kind.as_str()] { (label) }
                    }
                }

                label for="excerpt" { "Excerpt" }
                textarea id="excerpt" name="excerpt" placeholder="Brief summary..." { (form.excerpt) }

                label for="tags" { "Tags (comma separated)" }
                input id="tags" name="tags" value=(form.tags) placeholder="AI, Research";

                label for="read_time" { "Read time (minutes)" }
                input id="read_time" name="read_time" type="number" min="1" value=(form.read_time);

                label for="cover_image" { "Cover image URL" }
                input id="cover_image" name="cover_image" value=(form.cover_image);

                label for="published" {
                    input id="published" name="published" type="checkbox" style="width: auto;" checked[form.published.is_some()];
                    " Publish Immediately"
                }

                p { button type="submit" { "Save Entity" } }
            }
        },
    )
}
