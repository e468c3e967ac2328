pub(crate) const REMOVE_REFUSED: &str =
    "I'm sorry but you can't remove a pixel that someone else contributed";

pub(crate) const ONE_PIXEL_PER_IDENTITY: &str =
    "I'm sorry but you can only contribute one pixel per GitHub username.";

pub(crate) const ACCIDENTAL_DELETION: &str = "It seems like you are accidentally deleting some contributions of others. Please make sure you have pulled the latest changes from the master branch and resolved any merge conflicts. https://help.github.com/en/articles/syncing-a-fork";

pub(crate) const SAME_ROW: &str = "Please make sure all of your changes are on the same line and that you are only modifying one row.";

pub(crate) const EMPTY_PATCH: &str = "This PR appears to be empty and needs a manual review";

pub(crate) const OVERRIDE_REFUSED: &str = "I'm sorry but you cannot override someone elses pixel.";

pub(crate) const MISSING_COLOR: &str =
    "Please specify either a color using `color: '#000000` in your pixel.";

pub(crate) fn deleted_usernames(usernames: &[String]) -> String {
    format!(
        "Make sure that the following usernames are indeed included: {}",
        usernames.join(",")
    )
}

pub(crate) fn username_mismatch(submitter: &str, submitted: &str) -> String {
    format!(
        "The username in your pixel submission needs to match your username of \"{submitter}\". You submitted \"{submitted}\" instead."
    )
}

pub(crate) fn invalid_coordinate(axis: &str) -> String {
    format!(
        "Please make sure your pixel submission has a valid positive `{axis}` coordinate as a number."
    )
}
