use pain_matrix_core::{Post, RenderedBlock};

pub const EMPTY_PLACEHOLDER: &str = "*No posts available at this time.*\n";

/// Renders posts as a numbered markdown list, one line per post.
///
/// Titles are inserted as-is; markdown characters in them are not escaped.
pub fn render(posts: &[Post]) -> RenderedBlock {
    if posts.is_empty() {
        return RenderedBlock::new(EMPTY_PLACEHOLDER);
    }

    let mut markdown = String::new();
    for (i, post) in posts.iter().enumerate() {
        markdown.push_str(&format!(
            "{}. **[{}]({})** (↑{} | 💬{})\n",
            i + 1,
            post.title(),
            post.url(),
            post.score(),
            post.comment_count()
        ));
    }

    RenderedBlock::new(markdown)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_renders_placeholder() {
        let block = render(&[]);
        assert_eq!(block.as_str(), "*No posts available at this time.*\n");
        assert!(!block.as_str().is_empty());
    }

    #[test]
    fn test_line_format() {
        let posts = vec![
            Post::new("Hello", "https://reddit.com/r/a/comments/1/hello/", 42, 7),
            Post::new("Down", "https://reddit.com/r/a/comments/2/down/", -3, 0),
        ];

        let block = render(&posts);
        assert_eq!(
            block.as_str(),
            "1. **[Hello](https://reddit.com/r/a/comments/1/hello/)** (↑42 | 💬7)\n\
             2. **[Down](https://reddit.com/r/a/comments/2/down/)** (↑-3 | 💬0)\n"
        );
    }

    #[test]
    fn test_line_count_matches_posts() {
        let posts: Vec<Post> = (0..7)
            .map(|i| Post::new(format!("t{}", i), "https://reddit.com/x", i, 0))
            .collect();

        let block = render(&posts);
        assert_eq!(block.as_str().lines().count(), posts.len());
        assert!(block.as_str().ends_with('\n'));
    }

    #[test]
    fn test_titles_not_escaped() {
        let posts = vec![Post::new(
            "[Serious] *bold* claim](oops",
            "https://reddit.com/y",
            1,
            1,
        )];

        let block = render(&posts);
        assert!(block
            .as_str()
            .starts_with("1. **[[Serious] *bold* claim](oops](https://reddit.com/y)**"));
    }
}
