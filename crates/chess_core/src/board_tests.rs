use super::*;

#[test]
fn test_startpos_back_ranks() {
    let b = Board::startpos();
    for (col, &kind) in BACK_RANK.iter().enumerate() {
        let black = b.get(Square::new(0, col as i8).unwrap()).unwrap();
        let white = b.get(Square::new(7, col as i8).unwrap()).unwrap();
        assert_eq!((black.kind, black.color), (kind, Color::Black));
        assert_eq!((white.kind, white.color), (kind, Color::White));
    }
}

#[test]
fn test_startpos_pawns_and_empty_middle() {
    let b = Board::startpos();
    for col in 0..8 {
        assert_eq!(
            b.get(Square::new(1, col).unwrap()),
            Some(Piece::new(PieceKind::Pawn, Color::Black))
        );
        assert_eq!(
            b.get(Square::new(6, col).unwrap()),
            Some(Piece::new(PieceKind::Pawn, Color::White))
        );
        for row in 2..6 {
            assert!(b.get(Square::new(row, col).unwrap()).is_none());
        }
    }
}

#[test]
fn test_in_bounds() {
    assert!(Board::in_bounds(0, 0));
    assert!(Board::in_bounds(7, 7));
    assert!(!Board::in_bounds(-1, 3));
    assert!(!Board::in_bounds(3, 8));
    assert!(Square::new(8, 0).is_none());
}

#[test]
fn test_take_leaves_square_empty() {
    let mut b = Board::startpos();
    let sq = Square::new(6, 4).unwrap();
    let pc = b.take(sq);
    assert_eq!(pc.map(|p| p.kind), Some(PieceKind::Pawn));
    assert!(b.get(sq).is_none());
    assert_eq!(b.count(PieceKind::Pawn, Color::White), 7);
}

#[test]
fn test_diagram_roundtrips_through_display() {
    let b = Board::startpos();
    let text = b.to_string();
    assert_eq!(text.lines().next(), Some("rnbqkbnr"));
    assert_eq!(text.lines().last(), Some("RNBQKBNR"));
    assert_eq!(Board::from_diagram(&text).unwrap(), b);
}

#[test]
fn test_diagram_errors() {
    assert_eq!(
        Board::from_diagram("........\n"),
        Err(ParseBoardError::RowCount(1))
    );

    let short = "rnbqkbnr\npppppppp\n........\n........\n........\n........\nPPPPPPP\nRNBQKBNR";
    assert_eq!(
        Board::from_diagram(short),
        Err(ParseBoardError::RowWidth { row: 6, width: 7 })
    );

    let bad = "rnbqkbnr\npppppppp\n....x...\n........\n........\n........\nPPPPPPPP\nRNBQKBNR";
    assert_eq!(
        Board::from_diagram(bad),
        Err(ParseBoardError::InvalidPiece { row: 2, ch: 'x' })
    );
}
