use crate::models::Post;

/// Keeps posts whose body length lies in `[min_chars, max_chars]`.
///
/// Returns a new vector in input order; `min_chars > max_chars` yields nothing.
pub fn filter_posts(posts: &[Post], min_chars: usize, max_chars: usize) -> Vec<Post> {
    posts
        .iter()
        .filter(|post| (min_chars..=max_chars).contains(&post.body_len()))
        .cloned()
        .collect()
}
