use pain_matrix_core::Post;

/// Concatenates per-board results in board order.
pub fn aggregate<I>(per_board: I) -> Vec<Post>
where
    I: IntoIterator<Item = Vec<Post>>,
{
    per_board.into_iter().flatten().collect()
}
