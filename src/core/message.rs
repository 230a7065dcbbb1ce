/// Renders the text message: one `date:` line per night followed by its
/// performers, nights separated by a blank line, and the playlist link last.
pub fn compose_message(dates: &[String], performers: &[Vec<String>], playlist_link: &str) -> String {
    let nights: Vec<String> = dates
        .iter()
        .zip(performers)
        .map(|(date, names)| format!("{}:\n{}", date, names.join("\n")))
        .collect();

    format!("{}\n\n{}", nights.join("\n\n"), playlist_link)
}
