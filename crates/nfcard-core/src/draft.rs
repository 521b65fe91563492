//! # Order Draft
//!
//! The "current order draft": one [`OrderConfiguration`] and one
//! [`LayoutModel`] owned together for the whole configuration flow.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Draft Lifecycle                                      │
//! │                                                                         │
//! │  configurator mounts ──► OrderDraft::new()   (1 × standard, black)      │
//! │          │                                                              │
//! │          ▼                                                              │
//! │  apply(cmd) ◄──── every click, keystroke, drag                          │
//! │          │        └─► CommandOutcome { released } ──► host frees image  │
//! │          ▼                                                              │
//! │  checkout::prepare_checkout(&draft)                                     │
//! │          │                                                              │
//! │          ▼                                                              │
//! │  Reset / take_asset() on teardown ──► last image handle released        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Pricing and layout never read each other; they just live side by side.

use crate::command::{CommandOutcome, DraftCommand};
use crate::gesture::DragGesture;
use crate::layout::{AssetRef, LayoutModel};
use crate::order::OrderConfiguration;
use crate::pricing::{compute_price_with, PriceBreakdown, PriceList};

/// The buyer's in-progress order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderDraft {
    order: OrderConfiguration,
    layout: LayoutModel,
    gesture: Option<DragGesture>,
}

impl OrderDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies every command in order to a fresh draft.
    ///
    /// Returns the draft and every handle released along the way.
    pub fn replay<I>(commands: I) -> (Self, Vec<AssetRef>)
    where
        I: IntoIterator<Item = DraftCommand>,
    {
        let mut draft = Self::new();
        let released = commands
            .into_iter()
            .filter_map(|cmd| draft.apply(cmd).released)
            .collect();
        (draft, released)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn order(&self) -> &OrderConfiguration {
        &self.order
    }

    /// Committed layout. Ignores any open drag gesture.
    pub fn layout(&self) -> &LayoutModel {
        &self.layout
    }

    /// Layout to draw right now, including an open gesture's transient
    /// movement.
    pub fn displayed_layout(&self) -> LayoutModel {
        match &self.gesture {
            Some(gesture) => gesture.preview(),
            None => self.layout.clone(),
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.gesture.is_some()
    }

    /// Prices the order against the given list.
    pub fn price(&self, prices: &PriceList) -> PriceBreakdown {
        compute_price_with(&self.order, prices)
    }

    // =========================================================================
    // Commands
    // =========================================================================

    /// Applies one command.
    ///
    /// Layout commands other than drag movement cancel an open gesture first,
    /// so a half-finished drag can never leak into the committed layout.
    pub fn apply(&mut self, command: DraftCommand) -> CommandOutcome {
        let interrupts_gesture = command.is_layout()
            && !matches!(
                command,
                DraftCommand::DragLogo { .. } | DraftCommand::EndDrag | DraftCommand::CancelDrag
            );
        if interrupts_gesture {
            self.gesture = None;
        }

        match command {
            DraftCommand::SetQuantity { quantity } => self.order.set_quantity(quantity),
            DraftCommand::SetCardType { card_type } => self.order.set_card_type(card_type),
            DraftCommand::SetColor { color } => self.order.set_color(color),
            DraftCommand::SetB2bPersonalization { enabled } => {
                self.order.set_b2b_personalization(enabled)
            }
            DraftCommand::SetPrintedFields { fields } => self.order.set_printed_fields(fields),

            DraftCommand::UploadLogo { asset } => {
                let swap = self.layout.set_asset(asset);
                self.layout = swap.layout;
                return CommandOutcome::released(swap.released);
            }
            DraftCommand::RemoveLogo => return CommandOutcome::released(self.take_asset()),
            DraftCommand::BeginDrag => self.gesture = Some(DragGesture::begin(&self.layout)),
            DraftCommand::DragLogo { dx, dy } => match self.gesture.as_mut() {
                Some(gesture) => gesture.update(dx, dy),
                None => self.layout = self.layout.drag_by(dx, dy),
            },
            DraftCommand::EndDrag => {
                if let Some(gesture) = self.gesture.take() {
                    self.layout = gesture.commit();
                }
            }
            DraftCommand::CancelDrag => {
                if let Some(gesture) = self.gesture.take() {
                    self.layout = gesture.cancel();
                }
            }
            DraftCommand::SetScale { scale } => self.layout = self.layout.set_scale(scale),
            DraftCommand::SetFullBleed { enabled } => {
                self.layout = self.layout.set_full_bleed(enabled)
            }
            DraftCommand::ToggleFullBleed => {
                self.layout = self.layout.set_full_bleed(!self.layout.is_full_bleed())
            }
            DraftCommand::Recenter => self.layout = self.layout.recenter(),
            DraftCommand::Reset => {
                let released = self.take_asset();
                *self = Self::new();
                return CommandOutcome::released(released);
            }
        }

        CommandOutcome::default()
    }

    /// Detaches the logo handle, resetting the placement. The caller becomes
    /// responsible for releasing it.
    pub fn take_asset(&mut self) -> Option<AssetRef> {
        self.gesture = None;
        let swap = self.layout.clear_asset();
        self.layout = swap.layout;
        swap.released
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::order::{CardColor, CardType, PrintedFields};

    fn upload(id: &str) -> DraftCommand {
        DraftCommand::UploadLogo {
            asset: AssetRef::new(id),
        }
    }

    #[test]
    fn test_new_draft_defaults() {
        let draft = OrderDraft::new();
        assert_eq!(draft.order(), &OrderConfiguration::default());
        assert_eq!(draft.layout(), &LayoutModel::default());
        assert!(!draft.is_dragging());
        assert_eq!(draft.price(&PriceList::default()).total, Money::from_cents(2900));
    }

    #[test]
    fn test_order_commands() {
        let (draft, released) = OrderDraft::replay([
            DraftCommand::SetQuantity { quantity: 10 },
            DraftCommand::SetCardType {
                card_type: CardType::Personalized,
            },
            DraftCommand::SetColor {
                color: CardColor::Silver,
            },
            DraftCommand::SetB2bPersonalization { enabled: true },
            DraftCommand::SetPrintedFields {
                fields: PrintedFields::new("Ada Lovelace", "Engineer", "Analytical Ltd"),
            },
        ]);
        assert!(released.is_empty());
        assert_eq!(draft.order().quantity(), 10);
        assert_eq!(draft.order().display_color(), Some(CardColor::Silver));
        assert!(draft.order().b2b_personalization());
        assert_eq!(draft.order().printed_fields().name, "Ada Lovelace");

        let price = draft.price(&PriceList::default());
        assert_eq!(price.unit_price.cents(), 4165);
        assert_eq!(price.customization_total.cents(), 10_000);
    }

    #[test]
    fn test_each_replaced_asset_released_once() {
        let (draft, released) = OrderDraft::replay([
            upload("a"),
            DraftCommand::DragLogo { dx: 10.0, dy: 0.0 },
            upload("b"),
            upload("b"),
            upload("c"),
            DraftCommand::RemoveLogo,
            DraftCommand::RemoveLogo,
        ]);
        assert_eq!(
            released,
            vec![AssetRef::new("a"), AssetRef::new("b"), AssetRef::new("c")]
        );
        assert!(!draft.layout().has_logo());
    }

    #[test]
    fn test_upload_resets_placement() {
        let mut draft = OrderDraft::new();
        draft.apply(upload("a"));
        draft.apply(DraftCommand::DragLogo { dx: 20.0, dy: 20.0 });
        draft.apply(DraftCommand::SetScale { scale: 1.8 });
        draft.apply(upload("b"));
        assert_eq!(draft.layout().position(), (50.0, 50.0));
        assert_eq!(draft.layout().scale(), 1.0);
    }

    #[test]
    fn test_gesture_commits_only_on_end() {
        let mut draft = OrderDraft::new();
        draft.apply(upload("a"));
        draft.apply(DraftCommand::BeginDrag);
        draft.apply(DraftCommand::DragLogo { dx: 5.0, dy: 0.0 });
        draft.apply(DraftCommand::DragLogo { dx: 5.0, dy: 5.0 });

        assert!(draft.is_dragging());
        assert_eq!(draft.layout().position(), (50.0, 50.0));
        assert_eq!(draft.displayed_layout().position(), (60.0, 55.0));

        draft.apply(DraftCommand::EndDrag);
        assert!(!draft.is_dragging());
        assert_eq!(draft.layout().position(), (60.0, 55.0));
    }

    #[test]
    fn test_cancel_drag_falls_back_to_committed() {
        let mut draft = OrderDraft::new();
        draft.apply(upload("a"));
        draft.apply(DraftCommand::DragLogo { dx: -10.0, dy: 0.0 });
        draft.apply(DraftCommand::BeginDrag);
        draft.apply(DraftCommand::DragLogo { dx: 30.0, dy: 30.0 });
        draft.apply(DraftCommand::CancelDrag);

        assert_eq!(draft.layout().position(), (40.0, 50.0));
        assert_eq!(draft.displayed_layout().position(), (40.0, 50.0));
    }

    #[test]
    fn test_other_layout_command_interrupts_gesture() {
        let mut draft = OrderDraft::new();
        draft.apply(upload("a"));
        draft.apply(DraftCommand::BeginDrag);
        draft.apply(DraftCommand::DragLogo { dx: 20.0, dy: 0.0 });
        draft.apply(DraftCommand::SetScale { scale: 1.5 });
        draft.apply(DraftCommand::EndDrag);

        assert_eq!(draft.layout().position(), (50.0, 50.0));
        assert_eq!(draft.layout().scale(), 1.5);
    }

    #[test]
    fn test_order_commands_do_not_interrupt_gesture() {
        let mut draft = OrderDraft::new();
        draft.apply(DraftCommand::BeginDrag);
        draft.apply(DraftCommand::SetQuantity { quantity: 3 });
        assert!(draft.is_dragging());
    }

    #[test]
    fn test_toggle_full_bleed() {
        let mut draft = OrderDraft::new();
        draft.apply(upload("a"));
        draft.apply(DraftCommand::DragLogo { dx: 30.0, dy: 30.0 });
        draft.apply(DraftCommand::ToggleFullBleed);
        assert!(draft.layout().is_full_bleed());
        assert_eq!(draft.layout().position(), (50.0, 50.0));

        draft.apply(DraftCommand::ToggleFullBleed);
        assert!(!draft.layout().is_full_bleed());
        assert_eq!(draft.layout().scale(), 1.0);
    }

    #[test]
    fn test_reset_releases_and_restores_defaults() {
        let mut draft = OrderDraft::new();
        draft.apply(DraftCommand::SetQuantity { quantity: 30 });
        draft.apply(upload("a"));
        draft.apply(DraftCommand::BeginDrag);

        let outcome = draft.apply(DraftCommand::Reset);
        assert_eq!(outcome.released, Some(AssetRef::new("a")));
        assert_eq!(draft, OrderDraft::new());
    }

    #[test]
    fn test_replay_is_deterministic() {
        let commands = vec![
            upload("a"),
            DraftCommand::SetQuantity { quantity: 7 },
            DraftCommand::BeginDrag,
            DraftCommand::DragLogo { dx: -70.0, dy: 12.0 },
            DraftCommand::EndDrag,
            DraftCommand::SetScale { scale: 3.0 },
        ];
        let (first, _) = OrderDraft::replay(commands.clone());
        let (second, _) = OrderDraft::replay(commands);
        assert_eq!(first, second);
        assert_eq!(first.layout().position(), (15.0, 62.0));
        assert_eq!(first.layout().scale(), 2.0);
    }
}
