/// Long-form explanation posted when a pull request touches more than the
/// dataset file.
pub fn manual_review_faq(files: &[String], dataset_file: &str) -> String {
    let listing = files
        .iter()
        .map(|name| format!("- {name}"))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "## FAQ

*Why has my Pull Request failed the tests?*

Your Pull Request didn't fail the tests but you modified more files with
this PR than just the `{dataset_file}` file.

The files you modified are:
{listing}

If you did this on purpose, please consider breaking your PR into multiple ones.
This will help us to auto-verify your pixels change and someone will take a
look at the remaining PR.

If you *didn't* do this on purpose, check out https://dangitgit.com/ or
other resources on how you can revert the remaining changes."
    )
}

pub(crate) fn manual_review_reason(dataset_file: &str) -> String {
    format!(
        "This PR requires a manual review because you are changing more files than just `{dataset_file}`."
    )
}

#[cfg(test)]
#[path = "faq_test.rs"]
mod tests;
