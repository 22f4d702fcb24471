use pain_matrix_core::Post;
use std::cmp::Reverse;

/// Orders posts by score, highest first, and keeps the first `top_n`.
///
/// The sort is stable: posts with equal scores stay in aggregation order.
pub fn rank(mut posts: Vec<Post>, top_n: usize) -> Vec<Post> {
    posts.sort_by_key(|post| Reverse(post.score()));
    posts.truncate(top_n);
    posts
}
