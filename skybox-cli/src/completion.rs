use dialoguer::Completion;

/// Completes the last component of a path from the entries of its directory
#[derive(Debug, Default, Clone, Copy)]
pub struct PathCompletion;

impl Completion for PathCompletion {
    fn get(&self, input: &str) -> Option<String> {
        let (directory, prefix) = split_input(input);
        let search = if directory.is_empty() { "." } else { directory };

        let mut candidates: Vec<(String, bool)> = std::fs::read_dir(search)
            .ok()?
            .flatten()
            .filter_map(|entry| {
                let name = entry.file_name().into_string().ok()?;
                let is_dir = entry.path().is_dir();
                name.starts_with(prefix).then_some((name, is_dir))
            })
            .collect();

        candidates.sort();

        match candidates.as_slice() {
            [] => None,
            [(name, is_dir)] => {
                let separator = if *is_dir { "/" } else { "" };
                Some(format!("{directory}{name}{separator}"))
            }
            [(first, _), rest @ ..] => {
                let common = rest
                    .iter()
                    .fold(first.as_str(), |common, (name, _)| common_prefix(common, name));

                if common.len() > prefix.len() {
                    Some(format!("{directory}{common}"))
                } else {
                    None
                }
            }
        }
    }
}

fn split_input(input: &str) -> (&str, &str) {
    match input.rfind(|c: char| c == '/' || c == std::path::MAIN_SEPARATOR) {
        Some(index) => input.split_at(index + 1),
        None => ("", input),
    }
}

fn common_prefix<'a>(left: &'a str, right: &str) -> &'a str {
    let length = left
        .char_indices()
        .zip(right.chars())
        .take_while(|((_, a), b)| a == b)
        .last()
        .map(|((index, a), _)| index + a.len_utf8())
        .unwrap_or(0);

    &left[..length]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> tempdir::TempDir {
        let tmp = tempdir::TempDir::new("skybox-cli").expect("failed to create temp dir");
        std::fs::write(tmp.path().join("sky_day.png"), b"").expect("failed to write file");
        std::fs::write(tmp.path().join("sky_dusk.png"), b"").expect("failed to write file");
        std::fs::create_dir(tmp.path().join("textures")).expect("failed to create dir");
        tmp
    }

    #[test]
    fn completes_single_candidate() {
        let tmp = fixture();
        let base = format!("{}/", tmp.path().display());

        assert_eq!(
            PathCompletion.get(&format!("{base}te")),
            Some(format!("{base}textures/"))
        );
        assert_eq!(
            PathCompletion.get(&format!("{base}sky_da")),
            Some(format!("{base}sky_day.png"))
        );
    }

    #[test]
    fn completes_common_prefix() {
        let tmp = fixture();
        let base = format!("{}/", tmp.path().display());

        assert_eq!(
            PathCompletion.get(&format!("{base}sk")),
            Some(format!("{base}sky_d"))
        );
        assert_eq!(PathCompletion.get(&format!("{base}sky_d")), None);
        assert_eq!(PathCompletion.get(&format!("{base}moon")), None);
    }

    #[test]
    fn missing_directory_has_no_completion() {
        let tmp = fixture();
        let input = format!("{}/missing/sky", tmp.path().display());
        assert_eq!(PathCompletion.get(&input), None);
    }

    #[test]
    fn splits_directory_and_prefix() {
        assert_eq!(split_input("textures/sky"), ("textures/", "sky"));
        assert_eq!(split_input("sky"), ("", "sky"));
        assert_eq!(split_input("textures/"), ("textures/", ""));
        assert_eq!(common_prefix("sky_day", "sky_dusk"), "sky_d");
        assert_eq!(common_prefix("moon", "sky"), "");
    }
}
