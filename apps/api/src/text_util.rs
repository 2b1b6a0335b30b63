/// Title-cases text the way display labels are expected: the first cased
/// character of every word is uppercased, the rest lowercased. Any non-letter
/// starts a new word, so `"node.js"` becomes `"Node.Js"`.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_cased = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if prev_cased {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_cased = true;
        } else {
            out.push(c);
            prev_cased = false;
        }
    }
    out
}
