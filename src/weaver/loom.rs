// file: src/weaver/loom.rs
// version: 1.0.0
// guid: 4756dd65-f205-437b-999a-953634cae2c6

//! Loom operations: lift thread ends as pins, cut level tours at those
//! pins and splice the pieces back onto the threads

use crate::weaver::types::{Loom, Pins, Subtours, Tour, Vert};

/// Push a copy of both ends of every thread onto the thread, lifted to
/// level `z`. The lifted copies are the pins at which the tour for
/// level `z` is cut so its pieces can continue each thread.
pub fn pin_ends(loom: &mut Loom, z: i32) -> Pins {
    let mut pins = Pins::new();
    for thread in loom.iter_mut() {
        let (Some(&(hx, hy, _)), Some(&(tx, ty, _))) = (thread.front(), thread.back()) else {
            continue;
        };
        let left = (hx, hy, z);
        let right = (tx, ty, z);
        thread.push_front(left);
        thread.push_back(right);
        pins.insert(left);
        pins.insert(right);
    }
    pins
}

/// Cut a level tour at its pins.
///
/// Without pins the whole tour is returned reversed. Otherwise the tour
/// is split so every piece except possibly the last starts at a pin;
/// when the tour does not begin at a pin, its head is reversed up to the
/// first pin and the stretch between the first two pins is kept as a
/// pinless leftover.
pub fn chop(mut tour: Tour, pins: &Pins) -> Subtours {
    if pins.is_empty() {
        tour.reverse();
        return vec![tour];
    }
    let idxs: Vec<usize> = tour
        .iter()
        .enumerate()
        .filter_map(|(i, v)| pins.contains(v).then_some(i))
        .collect();
    let mut subtours = Subtours::with_capacity(idxs.len() + 1);
    for (i, j) in idxs.iter().copied().enumerate().rev() {
        if i == 0 && !pins.contains(&tour[0]) {
            let rest = tour.split_off(j + 1);
            tour.reverse();
            subtours.push(std::mem::take(&mut tour));
            if !rest.is_empty() {
                subtours.push(rest);
            }
        } else {
            subtours.push(tour.split_off(j));
        }
    }
    subtours
}

/// Splice subtours onto the threads they continue.
///
/// A piece whose head matches a thread's front is joined there with its
/// order reversed, a piece matching the back extends it in order. Pieces
/// matching neither end become new threads.
pub fn extend_threads(loom: &mut Loom, subtours: Subtours) {
    let mut used = vec![false; subtours.len()];
    for thread in loom.iter_mut() {
        for (idx, subtour) in subtours.iter().enumerate() {
            if used[idx] {
                continue;
            }
            let Some(&head) = subtour.first() else {
                used[idx] = true;
                continue;
            };
            if thread.front() == Some(&head) {
                for &vert in &subtour[1..] {
                    thread.push_front(vert);
                }
                used[idx] = true;
            } else if thread.back() == Some(&head) {
                thread.extend(subtour[1..].iter().copied());
                used[idx] = true;
            }
        }
    }
    for (idx, subtour) in subtours.into_iter().enumerate() {
        if !used[idx] {
            loom.push(subtour.into());
        }
    }
}

/// Append to every thread its own reflection through the equator,
/// turning each half chain into a closed cycle.
pub fn mirror_chains(loom: &mut [Tour]) {
    for thread in loom.iter_mut() {
        let mirrored: Vec<Vert> = thread.iter().rev().map(|&(x, y, z)| (x, y, -z)).collect();
        thread.extend(mirrored);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weaver::yarn::spin;
    use std::collections::VecDeque;

    fn lift(points: &[(i32, i32)], z: i32) -> Tour {
        points.iter().map(|&(x, y)| (x, y, z)).collect()
    }

    #[test]
    fn test_pin_ends_lifts_both_ends() {
        // Arrange
        let mut loom: Loom = vec![VecDeque::from(lift(&[(1, 1), (1, -1), (-1, -1)], -3))];

        // Act
        let pins = pin_ends(&mut loom, -1);

        // Assert
        assert_eq!(pins, Pins::from([(1, 1, -1), (-1, -1, -1)]));
        assert_eq!(
            loom[0],
            VecDeque::from(vec![
                (1, 1, -1),
                (1, 1, -3),
                (1, -1, -3),
                (-1, -1, -3),
                (-1, -1, -1),
            ])
        );
    }

    #[test]
    fn test_chop_without_pins_reverses() {
        // Arrange
        let tour = lift(&[(1, 1), (1, -1), (-1, -1), (-1, 1)], -1);

        // Act
        let subtours = chop(tour, &Pins::new());

        // Assert
        assert_eq!(subtours, vec![lift(&[(-1, 1), (-1, -1), (1, -1), (1, 1)], -1)]);
    }

    #[test]
    fn test_chop_cuts_at_pins() {
        // Arrange
        let tour: Tour = spin(5).blue.iter().map(|&(x, y)| (x, y, -1)).collect();
        let pins = Pins::from([(-1, 3, -1), (3, 1, -1)]);

        // Act
        let subtours = chop(tour, &pins);

        // Assert
        assert_eq!(subtours.len(), 3);
        assert_eq!(subtours[0].len(), 15);
        assert_eq!(subtours[0][0], (-1, 3, -1));
        assert_eq!(
            subtours[1],
            vec![
                (3, 1, -1),
                (1, 1, -1),
                (1, -1, -1),
                (-1, -1, -1),
                (-1, 1, -1),
            ]
        );
        assert_eq!(
            subtours[2],
            vec![(3, 3, -1), (1, 3, -1), (1, 5, -1), (-1, 5, -1)]
        );
    }

    #[test]
    fn test_chop_when_tour_starts_at_pin() {
        // Arrange
        let tour = lift(&[(1, 1), (1, 3), (3, 3), (3, 1)], -1);
        let pins = Pins::from([(1, 1, -1), (3, 3, -1)]);

        // Act
        let subtours = chop(tour, &pins);

        // Assert
        assert_eq!(
            subtours,
            vec![
                lift(&[(3, 3), (3, 1)], -1),
                lift(&[(1, 1), (1, 3)], -1),
            ]
        );
    }

    #[test]
    fn test_extend_threads_attaches_at_both_ends() {
        // Arrange
        let mut loom: Loom = vec![VecDeque::from(lift(&[(1, 1), (1, -1), (-1, -1)], -1))];
        let subtours = vec![
            lift(&[(1, 1), (3, 1), (3, 3)], -1),
            lift(&[(-1, -1), (-3, -1)], -1),
            lift(&[(5, 1), (5, -1)], -1),
        ];

        // Act
        extend_threads(&mut loom, subtours);

        // Assert
        assert_eq!(loom.len(), 2);
        assert_eq!(
            loom[0],
            VecDeque::from(lift(
                &[(3, 3), (3, 1), (1, 1), (1, -1), (-1, -1), (-3, -1)],
                -1
            ))
        );
        assert_eq!(loom[1], VecDeque::from(lift(&[(5, 1), (5, -1)], -1)));
    }

    #[test]
    fn test_extend_threads_chains_within_one_pass() {
        // Arrange
        let mut loom: Loom = vec![VecDeque::from(lift(&[(1, 1), (1, -1)], -1))];
        let subtours = vec![
            lift(&[(1, 1), (1, 3)], -1),
            lift(&[(1, 3), (3, 3)], -1),
        ];

        // Act
        extend_threads(&mut loom, subtours);

        // Assert
        assert_eq!(loom.len(), 1);
        assert_eq!(
            loom[0],
            VecDeque::from(lift(&[(3, 3), (1, 3), (1, 1), (1, -1)], -1))
        );
    }

    #[test]
    fn test_mirror_chains_closes_each_thread() {
        // Arrange
        let mut loom = vec![lift(&[(1, 1), (1, -1), (-1, -1), (-1, 1)], -1)];

        // Act
        mirror_chains(&mut loom);

        // Assert
        assert_eq!(
            loom[0],
            vec![
                (1, 1, -1),
                (1, -1, -1),
                (-1, -1, -1),
                (-1, 1, -1),
                (-1, 1, 1),
                (-1, -1, 1),
                (1, -1, 1),
                (1, 1, 1),
            ]
        );
    }
}
