//! Apache server configuration for the deployed site.

use anyhow::{Context, Result};
use std::{fs, path::Path};

/// Compression, caching and security headers for Apache hosts.
pub const HTACCESS: &str = r#"# Enable compression
<IfModule mod_deflate.c>
    AddOutputFilterByType DEFLATE text/html text/plain text/css text/xml
    AddOutputFilterByType DEFLATE application/javascript application/json application/xml
    AddOutputFilterByType DEFLATE image/svg+xml font/woff2
</IfModule>

# Browser caching
<IfModule mod_expires.c>
    ExpiresActive On
    ExpiresByType text/html "access plus 1 hour"
    ExpiresByType text/css "access plus 1 year"
    ExpiresByType application/javascript "access plus 1 year"
    ExpiresByType image/jpeg "access plus 1 year"
    ExpiresByType image/png "access plus 1 year"
    ExpiresByType image/webp "access plus 1 year"
    ExpiresByType image/svg+xml "access plus 1 year"
    ExpiresByType font/woff2 "access plus 1 year"
</IfModule>

# Security headers
<IfModule mod_headers.c>
    Header set X-Content-Type-Options "nosniff"
    Header set X-Frame-Options "SAMEORIGIN"
    Header set X-XSS-Protection "1; mode=block"
    Header set Referrer-Policy "strict-origin-when-cross-origin"
</IfModule>
"#;

/// Writes `.htaccess` into the output root, returning its path.
pub fn write_htaccess(output: &Path) -> Result<std::path::PathBuf> {
    let path = output.join(".htaccess");
    fs::write(&path, HTACCESS)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_writes_fixed_directives() -> Result<()> {
        // Arrange
        let temp = TempDir::new()?;

        // Act
        let path = write_htaccess(temp.path())?;

        // Assert
        let content = fs::read_to_string(path)?;
        assert!(content.contains("mod_deflate"));
        assert!(content.contains("ExpiresActive On"));
        assert!(content.contains("X-Content-Type-Options"));
        Ok(())
    }
}
