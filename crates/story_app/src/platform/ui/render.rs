use story_core::{AppViewModel, StoryRowView};

use super::constants::*;

/// Renders a full screen of text for `view`.
pub fn render(view: &AppViewModel) -> String {
    let mut lines = Vec::new();

    lines.push(APP_TITLE.to_string());
    lines.push(format!("{SEARCH_LABEL} {}", view.search_term));
    lines.push("-".repeat(RULE_WIDTH));

    if view.is_error {
        match &view.error_detail {
            Some(detail) => lines.push(format!("{ERROR_TEXT} ({detail})")),
            None => lines.push(ERROR_TEXT.to_string()),
        }
    }

    if view.is_loading {
        lines.push(LOADING_TEXT.to_string());
    } else {
        lines.extend(
            view.stories
                .iter()
                .enumerate()
                .map(|(i, row)| format_story_row(i + 1, row)),
        );
        lines.push(format!(
            "Showing {} of {} stories, {} comments in total.",
            view.stories.len(),
            view.total_stories,
            format_with_commas(view.sum_comments)
        ));
    }

    lines.join("\n")
}

fn format_story_row(position: usize, row: &StoryRowView) -> String {
    let story = &row.story;
    let link = if story.url.is_empty() {
        String::new()
    } else {
        format!(" <{}>", story.url)
    };
    format!(
        "{position:>3}. {title}{link} | {author} | {comments} comments | {points} points",
        title = story.title,
        author = story.author,
        comments = story.num_comments,
        points = story.points,
    )
}

fn format_with_commas(value: u64) -> String {
    let mut out = String::new();
    for (i, ch) in value.to_string().chars().rev().enumerate() {
        if i != 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.chars().rev().collect()
}
