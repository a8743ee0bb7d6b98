use super::*;

fn scroll(content_length: usize, viewport_length: usize) -> Scroll {
    let mut scroll = Scroll::default();
    scroll.set_state(content_length, viewport_length);
    scroll
}

#[test]
fn it_stays_at_the_top_when_content_fits() {
    let mut scroll = scroll(5, 10);
    scroll.last();
    assert_eq!(scroll.position(), 0);
    assert!(scroll.is_position_at_last());
    scroll.down_page();
    assert_eq!(scroll.position(), 0);
}

#[test]
fn it_moves_by_lines_and_pages() {
    let mut scroll = scroll(100, 10);
    scroll.last();
    assert_eq!(scroll.position(), 90);

    scroll.up();
    assert_eq!(scroll.position(), 89);
    assert!(!scroll.is_position_at_last());

    scroll.up_page();
    assert_eq!(scroll.position(), 79);

    scroll.down_page();
    scroll.down_page();
    assert_eq!(scroll.position(), 90);

    scroll.down();
    assert_eq!(scroll.position(), 90);
}

#[test]
fn it_clamps_when_content_shrinks_below_the_position() {
    let mut scroll = scroll(100, 10);
    scroll.last();
    scroll.set_state(20, 10);
    assert_eq!(scroll.position(), 10);
}

#[test]
fn it_does_not_underflow() {
    let mut scroll = scroll(100, 10);
    scroll.up();
    scroll.up_page();
    assert_eq!(scroll.position(), 0);
}
