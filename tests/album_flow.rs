//! End-to-end checks over the pure album core: raw image list in,
//! paged navigation out.

use flipbook::album::{AlbumImage, BookView, Navigator, SheetList};

fn image(n: usize) -> AlbumImage {
    AlbumImage {
        id: format!("img-{n}"),
        url: format!("https://example.com/{n}.jpg"),
        alt: format!("Album image {}", n + 1),
    }
}

#[test]
fn five_images_with_one_duplicate_url_make_two_sheets() {
    // Four unique urls is even, so no padding happens.
    let mut images: Vec<_> = (0..4).map(image).collect();
    let mut repeat = image(2);
    repeat.id = "img-later-copy".to_string();
    images.push(repeat);

    let sheets = SheetList::build(&images);
    assert_eq!(sheets.len(), 2);
    assert_eq!(sheets.sheet(1).right.unwrap().id, "img-3");
}

#[test]
fn five_unique_images_make_three_sheets_with_a_padded_tail() {
    let images: Vec<_> = (0..5).map(image).collect();
    let sheets = SheetList::build(&images);
    assert_eq!(sheets.len(), 3);

    let tail = sheets.sheet(2);
    assert_eq!(tail.left.as_ref().unwrap().id, "img-4");
    assert_eq!(tail.right.as_ref().unwrap().id, "img-4-duplicate");
    assert_eq!(tail.right.unwrap().url, tail.left.unwrap().url);
}

#[test]
fn walking_the_whole_album_and_back_visits_every_sheet_once() {
    let images: Vec<_> = (0..8).map(image).collect();
    let sheets = SheetList::build(&images);
    let mut nav = Navigator::new(sheets.len());

    let mut visited = vec![nav.visible_index()];
    while let Some(token) = nav.go_next() {
        assert!(nav.complete(token));
        visited.push(nav.visible_index());
    }
    assert_eq!(visited, vec![0, 1, 2, 3]);

    while let Some(token) = nav.go_previous() {
        assert!(nav.complete(token));
    }
    assert_eq!(nav.visible_index(), 0);
}

#[test]
fn projection_after_commit_matches_a_fresh_session_at_that_sheet() {
    let images: Vec<_> = (0..6).map(image).collect();
    let sheets = SheetList::build(&images);

    let mut nav = Navigator::new(sheets.len());
    let token = nav.go_next().unwrap();

    // Mid-flight the projection shows both faces.
    let mid = BookView::project(&sheets, &nav);
    assert!(mid.incoming.is_some());

    nav.complete(token);
    let committed = BookView::project(&sheets, &nav);

    let mut fresh = Navigator::new(sheets.len());
    let token = fresh.go_next().unwrap();
    fresh.complete(token);
    assert_eq!(committed, BookView::project(&sheets, &fresh));
}

#[test]
fn reloading_the_album_mid_flip_discards_the_pending_completion() {
    let first: Vec<_> = (0..10).map(image).collect();
    let sheets = SheetList::build(&first);
    let mut nav = Navigator::new(sheets.len());

    let stale = nav.go_next().unwrap();

    // A different album loads before the flip timer fires.
    let second: Vec<_> = (20..24).map(image).collect();
    let sheets = SheetList::build(&second);
    nav.reset(sheets.len());

    assert!(!nav.complete(stale));
    assert_eq!(nav.visible_index(), 0);
    assert!(!nav.is_animating());

    // The new session navigates normally afterwards.
    let token = nav.go_next().unwrap();
    assert!(nav.complete(token));
    assert_eq!(nav.visible_index(), 1);
}
