//! Built-in scaffold for new posts
//!
//! `{{ title }}` and `{{ date }}` are substituted when a post is created. A
//! site can replace the body with its own `scaffolds/post.mdx`.

use std::fs;
use std::io;
use std::path::Path;

/// Body written below the metadata block of a new post
pub const POST_SCAFFOLD: &str = r#"<img src={metadata.cover_image} alt="cover image: {{ title }}"/>

## Introduction

Write your introduction here. This is where you'll hook your readers and give them a preview of what they'll learn.

## Main Content

### Section 1

Add your main content here. You can use:

- **Bold text** for emphasis
- *Italic text* for subtle emphasis
- `inline code` for code snippets
- [Links](https://example.com) to external resources

### Section 2

You can add code blocks like this:

```javascript
function example() {
  console.log("Hello, world!");
}
```

### Section 3

Add more sections as needed. You can include:

1. Numbered lists
2. For step-by-step instructions
3. Or ordered content

## Conclusion

Wrap up your blog post with key takeaways and next steps for your readers.

---

*Published on {{ date }}*
"#;

/// Load the post scaffold, preferring `<base_dir>/scaffolds/post.<ext>`
pub fn load_scaffold(base_dir: &Path, extension: &str) -> io::Result<String> {
    let scaffold_path = base_dir
        .join("scaffolds")
        .join(format!("post.{}", extension));
    if scaffold_path.exists() {
        tracing::debug!("Using scaffold {:?}", scaffold_path);
        return fs::read_to_string(&scaffold_path);
    }
    Ok(POST_SCAFFOLD.to_string())
}

/// Fill in scaffold placeholders
pub fn render_scaffold(scaffold: &str, title: &str, date: &str) -> String {
    scaffold
        .replace("{{ title }}", title)
        .replace("{{ date }}", date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_render_builtin_scaffold() {
        let body = render_scaffold(POST_SCAFFOLD, "My First Post", "2024-01-01");
        assert!(body.contains(r#"alt="cover image: My First Post""#));
        assert!(body.ends_with("*Published on 2024-01-01*\n"));
        assert!(!body.contains("{{"));
    }

    #[test]
    fn test_site_scaffold_overrides_builtin() {
        let tmp = TempDir::new().unwrap();
        assert_eq!(load_scaffold(tmp.path(), "mdx").unwrap(), POST_SCAFFOLD);

        fs::create_dir_all(tmp.path().join("scaffolds")).unwrap();
        fs::write(tmp.path().join("scaffolds/post.mdx"), "# {{ title }}\n").unwrap();
        let scaffold = load_scaffold(tmp.path(), "mdx").unwrap();
        assert_eq!(render_scaffold(&scaffold, "Hi", "2024-01-01"), "# Hi\n");
    }
}
