use alloc::string::String;
use core::fmt::{self, Write};

/// Writes `template` to `w`, substituting its placeholders with `args`.
///
/// `{}` takes the next argument and `{N}` takes the argument at index `N`. `{{` and `}}` are
/// escapes for literal braces. A placeholder without a matching argument (and any brace content
/// which is not a placeholder) is written as-is, while surplus arguments are ignored.
pub(crate) fn write_template<W>(w: &mut W, template: &str, args: &[String]) -> fmt::Result
where
    W: Write + ?Sized,
{
    let mut next = 0;
    let mut rest = template;

    while let Some(at) = rest.find(['{', '}']) {
        w.write_str(&rest[..at])?;
        let tail = &rest[at..];

        if tail.starts_with("{{") || tail.starts_with("}}") {
            w.write_str(&tail[..1])?;
            rest = &tail[2..];
            continue;
        }

        if tail.starts_with('}') {
            w.write_char('}')?;
            rest = &tail[1..];
            continue;
        }

        let Some(end) = tail[1..].find('}') else {
            w.write_str(tail)?;
            return Ok(());
        };

        let placeholder = &tail[..end + 2];
        let spec = &tail[1..end + 1];
        let arg = if spec.is_empty() {
            next += 1;
            args.get(next - 1)
        } else {
            spec.parse::<usize>().ok().and_then(|i| args.get(i))
        };

        w.write_str(arg.map_or(placeholder, String::as_str))?;
        rest = &tail[end + 2..];
    }

    w.write_str(rest)
}
