use super::*;

fn render(comment: Comment) -> String {
    view! { <CommentItem comment/> }.to_html()
}

#[test]
fn renders_subject_and_body_text() {
    let html = render(Comment::new(2, "Hello México!", "Buenas tardes"));
    assert!(html.contains("Hello México!"));
    assert!(html.contains("Buenas tardes"));
    assert!(html.contains(r#"data-comment-id="2""#));
}

#[test]
fn empty_body_renders_empty_body_element() {
    let html = render(Comment::new(0, "Quiet", ""));
    let open = r#"<p class="comment-item__body">"#;
    let start = html.find(open).unwrap() + open.len();
    let end = start + html[start..].find("</p>").unwrap();
    assert!(html[start..end].replace("<!>", "").trim().is_empty(), "unexpected markup: {html}");
}

#[test]
fn markup_in_text_is_escaped() {
    let html = render(Comment::new(1, "<b>bold</b>", "a & b"));
    assert!(!html.contains("<b>bold</b>"));
    assert!(html.contains("&lt;b&gt;bold&lt;/b&gt;"));
    assert!(html.contains("a &amp; b"));
}
