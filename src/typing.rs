use crate::error::{ChordError, ChordResult};
use crate::layout::{Key, Layout};
use crate::physical::{PhysicalState, Press, Tap, Taps};
use crate::symbols;

/// Text produced by a key sequence, ignoring layer state. Switch glyphs are
/// dropped.
pub fn type_keys(layout: &Layout, keys: &[Key]) -> String {
    keys.iter()
        .map(|&k| symbols::literal(layout.symbols(k)))
        .collect()
}

/// Replays taps against `state` and returns the text they produce.
///
/// Any state violation aborts the replay; `state` is left as it was right
/// before the offending tap.
pub fn type_taps(layout: &Layout, taps: &[Tap], state: &mut PhysicalState) -> ChordResult<String> {
    let mut out = String::new();
    for tap in taps {
        apply_tap(layout, *tap, state, &mut out)?;
    }
    Ok(out)
}

/// One-shot taps that type `keys` starting from `state`.
///
/// Whenever the active layer differs from the next key's layer, the shortest
/// chain of switch keys is tapped first. `state` ends where replaying the
/// taps would leave it.
pub fn decompose_to_taps(
    layout: &Layout,
    keys: &[Key],
    state: &mut PhysicalState,
) -> ChordResult<Taps> {
    let mut taps = Taps::new();
    let mut sink = String::new();

    for &key in keys {
        let from = state.peek_layer();
        if from != key.layer {
            let path = layout
                .shortest_layer_keys(from, key.layer)
                .ok_or(ChordError::UnreachableLayer {
                    from,
                    to: key.layer,
                })?;
            for &switch in path {
                let tap = Tap::once(switch);
                apply_tap(layout, tap, state, &mut sink)?;
                taps.push(tap);
            }
        }

        let tap = Tap::once(key.key);
        apply_tap(layout, tap, state, &mut sink)?;
        taps.push(tap);
    }

    Ok(taps)
}

fn apply_tap(
    layout: &Layout,
    tap: Tap,
    state: &mut PhysicalState,
    out: &mut String,
) -> ChordResult<()> {
    let info = *layout.keyboard().check_pos(tap.key)?;
    let (hand, finger) = (info.hand, info.finger);

    match tap.press {
        Press::Once => {
            if let Some(held) = state.is_finger_busy(hand, finger) {
                return Err(ChordError::FingerAlreadyBusy {
                    hand,
                    finger,
                    held,
                });
            }
            let layer = state.current_layer();
            let symbols = layout.symbols(Key::new(layer, tap.key));
            out.push_str(&symbols::literal(symbols));
            if let Some(next) = symbols::trailing_layer(symbols) {
                state.add_one_tap(next);
            }
        }
        Press::Down => {
            let layer = state.peek_layer();
            let target = symbols::sole_layer(layout.symbols(Key::new(layer, tap.key)))
                .ok_or(ChordError::NotAHoldKey {
                    layer,
                    key: tap.key,
                })?;
            state.busy_finger(hand, finger, tap.key, target)?;
            // The hold used up any pending one-shot.
            state.current_layer();
        }
        Press::Up => match state.is_finger_busy(hand, finger) {
            None => return Err(ChordError::FingerNotBusy { hand, finger }),
            Some(held) if held != tap.key => {
                return Err(ChordError::KeyNotHeld {
                    key: tap.key,
                    hand,
                    finger,
                    held,
                })
            }
            Some(_) => state.unbusy_finger(hand, finger)?,
        },
    }

    Ok(())
}
