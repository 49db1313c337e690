/// Render a byte count the way the per-file status lines show it.
pub fn human_size(bytes: usize) -> String {
    const KB: usize = 1024;
    const MB: usize = 1024 * 1024;

    if bytes < KB {
        format!("{}B", bytes)
    } else if bytes < MB {
        format!("{}KB", bytes / KB)
    } else {
        format!("{:.1}MB", bytes as f64 / MB as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_human_size_boundaries() {
        assert_eq!(human_size(0), "0B");
        assert_eq!(human_size(1023), "1023B");
        assert_eq!(human_size(1024), "1KB");
        assert_eq!(human_size(1024 * 1024 - 1), "1023KB");
        assert_eq!(human_size(1024 * 1024), "1.0MB");
        assert_eq!(human_size(3 * 1024 * 1024 / 2), "1.5MB");
    }
}
